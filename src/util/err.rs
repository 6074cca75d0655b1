/// Converts errors from their error type (of the submodule) to that of
/// a `greatcircle::Error` variant.
///
/// ```rust,ignore
/// use greatcircle::plot::error::PlotError;
/// greatcircle::impl_err!(PlotError, Plot);
/// ```
pub mod err_macro {
    #[macro_export]
    macro_rules! impl_err {
        ($from:ty, $variant:ident) => {
            impl From<$from> for $crate::Error {
                fn from(value: $from) -> Self {
                    $crate::Error::$variant(value)
                }
            }
        };
    }

    pub use impl_err;
}
