/// Numeric conversion and presentation helpers.
///
/// Decides whether a result is shown as an integer or as a fraction, using a
/// lossless `f64` to `i64` conversion.
pub mod num;
