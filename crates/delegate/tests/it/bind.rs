use core::cell::{Cell, RefCell};
use sigbind_delegate::{CallError, Delegate, TargetKind};
use std::rc::Rc;

fn sum(a: i32, b: i32, out: &Cell<i32>) {
    out.set(a + b);
}

struct Scaled {
    factor: i32,
}

impl Scaled {
    fn sum(&self, a: i32, b: i32, out: &Cell<i32>) {
        out.set(a + b * self.factor);
    }
}

#[derive(Debug, Default)]
struct Tally {
    total: u32,
    calls: usize,
}

impl Tally {
    fn add(&mut self, amount: u32) {
        self.total += amount;
        self.calls += 1;
    }
}

#[test]
fn function_matches_direct_call() {
    let direct = Cell::new(0);
    let wrapped = Cell::new(0);
    let delegate = Delegate::<(i32, i32, &Cell<i32>)>::from_fn(sum);

    for (a, b) in [(10, 20), (-5, 5), (i32::MAX, 0)] {
        sum(a, b, &direct);
        delegate.call((a, b, &wrapped));
        assert_eq!(direct.get(), wrapped.get(), "invoking {delegate:?} with ({a}, {b})");
    }

    assert_eq!(delegate.kind(), TargetKind::Function);
}

#[test]
fn method_matches_direct_call() {
    let scaled = Scaled { factor: 2 };
    let direct = Cell::new(0);
    let wrapped = Cell::new(0);
    let delegate = Delegate::<(i32, i32, &Cell<i32>)>::bind(&scaled, Scaled::sum);

    scaled.sum(10, 20, &direct);
    assert_eq!(delegate.try_call((10, 20, &wrapped)), Ok(()));
    assert_eq!(direct.get(), 50);
    assert_eq!(wrapped.get(), 50);
    assert_eq!(delegate.kind(), TargetKind::Method);
}

#[test]
fn mutable_method_borrows_cell() {
    let tally = RefCell::new(Tally::default());
    let delegate = Delegate::<(u32,)>::bind_mut(&tally, Tally::add);

    delegate.call((3,));
    delegate.call((4,));
    assert_eq!(tally.borrow().total, 7);

    let guard = tally.borrow();
    assert_eq!(delegate.try_call((100,)), Err(CallError::AlreadyBorrowed));
    drop(guard);

    assert_eq!(tally.borrow().calls, 2, "method must not run while borrowed");
    assert_eq!(delegate.try_call((1,)), Ok(()));
    assert_eq!(tally.borrow().total, 8);
}

#[test]
fn weak_target_fails_after_drop() {
    struct Flag(Cell<bool>);

    impl Flag {
        fn raise(&self) {
            self.0.set(true);
        }
    }

    let flag = Rc::new(Flag(Cell::new(false)));
    let delegate = Delegate::<()>::bind_weak(Rc::downgrade(&flag), Flag::raise);

    assert!(!delegate.is_expired());
    assert_eq!(delegate.try_call(()), Ok(()));
    assert!(flag.0.get());

    drop(flag);
    assert!(delegate.is_expired());
    assert_eq!(delegate.try_call(()), Err(CallError::Expired));
    delegate.call(());
    assert_eq!(delegate.kind(), TargetKind::Weak);
}

#[test]
fn zero_and_many_arguments() {
    let hits = Cell::new(0u32);

    let none = Delegate::<()>::from_closure(|| hits.set(hits.get() + 1));
    none.call(());
    none.clone().call(());
    assert_eq!(hits.get(), 2);

    #[allow(clippy::too_many_arguments)]
    fn eight(a: u8, b: u8, c: u8, d: u8, e: u8, f: u8, g: u8, out: &Cell<u32>) {
        out.set([a, b, c, d, e, f, g].iter().map(|&n| u32::from(n)).sum());
    }

    let many = Delegate::<(u8, u8, u8, u8, u8, u8, u8, &Cell<u32>)>::from_fn(eight);
    many.call((1, 2, 3, 4, 5, 6, 7, &hits));
    assert_eq!(hits.get(), 28);
}

#[test]
fn debug_shows_target() {
    fn free(_: i32) {}

    insta::assert_debug_snapshot!(Delegate::<(i32,)>::from_fn(free), @r###"
    Delegate {
        kind: Function,
        target: fn(i32),
    }
    "###);

    let tally = RefCell::new(Tally::default());
    insta::assert_debug_snapshot!(Delegate::<(u32,)>::bind_mut(&tally, Tally::add), @r###"
    Delegate {
        kind: MethodMut,
        target: &RefCell<it::bind::Tally>,
    }
    "###);

    let scaled = Rc::new(Scaled { factor: 1 });
    let weak = Delegate::<(i32, i32, &Cell<i32>)>::bind_weak(Rc::downgrade(&scaled), Scaled::sum);
    drop(scaled);
    insta::assert_debug_snapshot!(weak, @r###"
    Delegate {
        kind: Weak,
        target: Weak<it::bind::Scaled> (expired),
    }
    "###);
}

#[test]
fn arguments_may_be_borrowed_after_construction() {
    let scaled = Scaled { factor: 3 };
    let plain = Delegate::<(i32, i32, &Cell<i32>)>::from_fn(sum);
    let bound = Delegate::<(i32, i32, &Cell<i32>)>::bind(&scaled, Scaled::sum);

    let result = Cell::new(0);
    plain.call((10, 20, &result));
    assert_eq!(result.get(), 30);

    bound.call((10, 20, &result));
    assert_eq!(result.get(), 70);
}
