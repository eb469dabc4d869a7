use sturdy::prelude::*;

#[derive(Clone, Copy, Debug, Default, StrongType)]
#[strong_type(skills(eq, add, sub, mul_t, mul_f, mul_i, div_t, div_f, div_i), display, serde)]
struct Volts(f64);

#[derive(Clone, Copy, Debug, Default, StrongType)]
#[strong_type(skills(cmp, mul, div))]
struct Ohms(f32);

fn needs_everything<T: Arithmetic + Equality + Copy>(x: T) -> T {
    let mut y = -x + x * x - x / x;
    y += x;
    y -= x;
    y *= 2i64;
    y /= 2.0f32;
    y * 3u32 / 3i32
}

fn main() {
    let v = needs_everything(Volts::new(4.0));
    assert!(v == Volts::new(11.0));

    let r = Ohms::new(10.0) * Ohms::new(2.0) / 4u32;
    assert!(r > Ohms::new(4.9) && r < Ohms::new(5.1));
    assert!(1.5f64 * r == r * 1.5f64);
}
