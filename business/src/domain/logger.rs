/// Logging port used by the product use cases.
///
/// Validation rejections go to `warn`, so client mistakes never show up as
/// server faults; store failures are reported by the HTTP layer at `error`.
pub trait Logger: Send + Sync {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
    fn debug(&self, message: &str);
}
