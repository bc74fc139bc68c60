/// Number formatting helpers.
///
/// Numbers are stored as `f64` but printed the way a user expects to read
/// them: integral values have no fractional part and at most six fractional
/// digits are kept otherwise.
pub mod num;
