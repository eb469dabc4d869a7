use sturdy::prelude::*;

#[derive(Clone, Copy, Debug, StrongType)]
#[strong_type(skills(cmp, add, mul_f))]
struct Weight<T>(T);

fn heavier<T: Comparison>(a: T, b: T) -> T {
    if a < b { b } else { a }
}

fn main() {
    let w = Weight::new(2.5f64) + Weight::new(1.0);
    let scaled = 2.0f32 * w;

    assert!(heavier(w, scaled) == scaled);
    assert!(Weight::new(3u8) > Weight::new(2u8));
}
