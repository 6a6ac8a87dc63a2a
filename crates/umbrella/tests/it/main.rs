//! End-to-end tests for the [`sigbind`] facade.

use sigbind::{signal::Signal, CallError, Delegate, TargetKind};
use std::cell::{Cell, RefCell};

fn add(a: i32, b: i32, result: &Cell<i32>) {
    result.set(a + b);
}

struct Multiplier {
    factor: i32,
}

impl Multiplier {
    fn multiply_sum(&self, a: i32, b: i32, result: &Cell<i32>) {
        result.set((a + b) * self.factor);
    }
}

#[test]
fn function_and_method_through_same_type() {
    let multiplier = Multiplier { factor: 5 };
    let result = Cell::new(0);

    let delegates = [
        Delegate::<(i32, i32, &Cell<i32>)>::from_fn(add),
        Delegate::<(i32, i32, &Cell<i32>)>::bind(&multiplier, Multiplier::multiply_sum),
    ];

    delegates[0].call((10, 20, &result));
    assert_eq!(result.get(), 30);

    delegates[1].call((4, 6, &result));
    assert_eq!(result.get(), 50);

    assert_eq!(delegates[0].kind(), TargetKind::Function);
    assert_eq!(delegates[1].kind(), TargetKind::Method);
}

#[test]
fn signal_log() {
    let log = RefCell::new(Vec::new());
    let log = &log;
    let signal = Signal::<(i32,)>::new();

    let first = signal.connect_closure(move |a| log.borrow_mut().push(format!("Slot1({a})")));
    let second = signal.connect_closure(move |a| log.borrow_mut().push(format!("Slot2({a})")));

    signal.emit((10,));
    assert!(signal.disconnect(second));
    signal.emit((20,));
    assert!(signal.disconnect(first));
    signal.emit((30,));

    assert_eq!(*log.borrow(), ["Slot1(10)", "Slot2(10)", "Slot1(20)"]);
    assert!(signal.is_empty());
}

#[test]
fn errors_describe_failure() {
    let object = std::rc::Rc::new(Multiplier { factor: 2 });
    let delegate = Delegate::<(i32, i32, &Cell<i32>)>::bind_weak(
        std::rc::Rc::downgrade(&object),
        Multiplier::multiply_sum,
    );
    drop(object);

    let result = Cell::new(0);
    let error = delegate.try_call((1, 2, &result)).unwrap_err();
    assert_eq!(error, CallError::Expired);
    insta::assert_snapshot!(error, @"bound object no longer exists");

    let boxed: Box<dyn std::error::Error> = Box::new(error);
    assert_eq!(boxed.to_string(), "bound object no longer exists");
}

trait Describe {
    fn describe(&self, out: &RefCell<String>) {
        out.borrow_mut().push_str("base");
    }
}

struct Base;

impl Describe for Base {}

struct Derived;

impl Describe for Derived {
    fn describe(&self, out: &RefCell<String>) {
        out.borrow_mut().push_str("derived");
    }
}

#[test]
fn trait_methods_bind_like_inherent_methods() {
    let base = Base;
    let derived = Derived;
    let out = RefCell::new(String::new());
    let signal = Signal::<(&RefCell<String>,)>::new();

    signal.connect_method(&base, <Base as Describe>::describe);
    signal.connect_method(&derived, <Derived as Describe>::describe);
    signal.emit((&out,));

    assert_eq!(*out.borrow(), "basederived");
}
