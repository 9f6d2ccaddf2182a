/// Grammar scanner states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// Scheme start state
    SchemeStart,
    /// Scheme state (letters, digits, `+`, `-`, `.` up to `:`)
    Scheme,
    /// No scheme state: the whole input is an opaque relative body
    NoScheme,
    /// Drive-letter or UNC input under the implicit file scheme
    ImplicitFile,
    /// Checking for the `//` that introduces an authority
    AuthoritySlashes,
    /// Authority state
    Authority,
    /// Path state; query and fragment are split off here
    Path,
}
