/// Reached a case the surrounding analysis rules out: a bug in the engine.
/// Loud in every profile, never folded into an ordinary failure.
#[cold]
#[inline(never)]
pub(crate) fn unreachable(what: &str) -> ! {
    panic!("internal error: entered unreachable code: {}", what)
}
