//! Capabilities the embedding application supplies.
//!
//! [`Policy`] is the exploit arm of epsilon-greedy and the bag type of bootstrap,
//! [`Scorer`] feeds softmax, and [`ContextText`] lets the default text recorder render a
//! context. Closures implement `Policy` and `Scorer` directly.
//!
//! # Concurrency
//!
//! Every method takes `&self`. The engine never serializes access to collaborators: if you
//! share one `Mwt` across threads, your policy/scorer must be `Sync` and tolerate concurrent
//! calls (use interior mutability for any state you keep).

/// Deterministic-given-context decision function.
///
/// Must return an action in `[0, num_actions)` of the strategy it is wrapped in; anything else
/// fails the decision with [`SelectionError::ActionOutOfRange`](crate::SelectionError).
///
/// # Example
///
/// ```rust
/// use mwt::Policy;
///
/// struct Fixed(u32);
///
/// impl Policy<str> for Fixed {
///     fn choose_action(&self, _context: &str) -> u32 {
///         self.0
///     }
/// }
///
/// let closure = |ctx: &str| ctx.len() as u32 % 3;
/// assert_eq!(Fixed(2).choose_action("x"), 2);
/// assert_eq!(closure.choose_action("abcd"), 1);
/// ```
pub trait Policy<C: ?Sized> {
    fn choose_action(&self, context: &C) -> u32;
}

impl<C: ?Sized, F> Policy<C> for F
where
    F: Fn(&C) -> u32,
{
    fn choose_action(&self, context: &C) -> u32 {
        self(context)
    }
}

/// Per-action scores used to build a sampling distribution.
///
/// Must return exactly `num_actions` finite scores, indexed by action.
pub trait Scorer<C: ?Sized> {
    fn scores(&self, context: &C) -> Vec<f32>;
}

impl<C: ?Sized, F> Scorer<C> for F
where
    F: Fn(&C) -> Vec<f32>,
{
    fn scores(&self, context: &C) -> Vec<f32> {
        self(context)
    }
}

/// Text rendering of a context, used by [`TextRecorder`](crate::TextRecorder).
///
/// Offline evaluators parse this text, so keep it stable.
pub trait ContextText {
    fn to_text(&self) -> String;
}

impl ContextText for str {
    fn to_text(&self) -> String {
        self.to_string()
    }
}

impl ContextText for String {
    fn to_text(&self) -> String {
        self.clone()
    }
}

impl ContextText for [f32] {
    fn to_text(&self) -> String {
        let parts: Vec<String> = self.iter().map(|x| x.to_string()).collect();
        parts.join(" ")
    }
}

impl ContextText for Vec<f32> {
    fn to_text(&self) -> String {
        self.as_slice().to_text()
    }
}
