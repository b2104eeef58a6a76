//! Scalar fallback for targets without a usable vector unit.

use crate::element::Element;

pub fn add<T: Element>(a: &[T], b: &[T], out: &mut [T]) {
    assert!(
        a.len() == out.len() && b.len() == out.len(),
        "length mismatch: a {} b {} out {}",
        a.len(),
        b.len(),
        out.len()
    );
    for ((o, &x), &y) in out.iter_mut().zip(a).zip(b) {
        *o = x + y;
    }
}

pub fn fill<T: Element>(out: &mut [T], value: T) {
    for o in out.iter_mut() {
        *o = value;
    }
}
