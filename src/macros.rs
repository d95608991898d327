#[doc(hidden)]
#[cfg(test)]
macro_rules! assert_ok {
    ($val:expr) => ({
        match $val {
            Ok( res ) => res,
            Err( err ) => panic!( "expected Ok(..) got Err({})", err)
        }
    });
    ($val:expr, $ctx:expr) => ({
        match $val {
            Ok( res ) => res,
            Err( err ) => panic!( "expected Ok(..) got Err({}) [ctx: {:?}]", err, $ctx)
        }
    });
}

/// Emits a `trace` event about a parameter the parser skipped.
///
/// Expands to nothing unless the `tracing` feature is enabled.
#[cfg(feature = "tracing")]
macro_rules! trace_param {
    ($($arg:tt)*) => {
        tracing::trace!($($arg)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_param {
    ($($arg:tt)*) => {};
}
