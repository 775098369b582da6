use std::fmt::Debug;

// ---------- Tune-ables ---------- //
pub const DEFAULT_ITERATIONS: usize = 10;  // How many plays the demo driver runs when not told otherwise
pub const MINIMAX_WINDOW: (Reward, Reward) = (Reward::NEG_INFINITY, Reward::INFINITY);  // Initial alpha-beta bounds

// ---------- Basic types (renamed for pretty) ---------- //
pub type Reward = f64;
/// 1-based player number as it appears on decision nodes
pub type PlayerIndex = usize;
/// Relative likelihood of a chance outcome
pub type Weight = usize;

// ---------- Traits the moves must provide ----------
/// Properties we want all moves to have (trees get shared across threads, so moves must be too)
pub trait MoveI: Clone + PartialEq + Debug + Send + Sync + 'static {}
impl<T: Clone + PartialEq + Debug + Send + Sync + 'static> MoveI for T {}

/// Position in a finite list of phases, sticking on the final element once we run past the end.
/// None only for an empty list.
#[inline]
pub fn clamp_index(len: usize, index: usize) -> Option<usize> {
    if len == 0 { None } else { Some(index.min(len - 1)) }
}

/// Element at `index`, or the last one when `index` runs past the end
#[inline]
pub fn clamped<T>(items: &[T], index: usize) -> Option<&T> {
    clamp_index(items.len(), index).and_then(|i| items.get(i))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_index_in_range() {
        let phases = [1, 2, 3];
        assert_eq!(clamped(&phases, 0), Some(&1));
        assert_eq!(clamped(&phases, 2), Some(&3));
        assert_eq!(clamp_index(3, 1), Some(1));
    }

    #[test]
    fn clamp_index_sticks_on_last() {
        let phases = ['a', 'b'];
        assert_eq!(clamped(&phases, 2), Some(&'b'));
        assert_eq!(clamped(&phases, 100), Some(&'b'));
        assert_eq!(clamp_index(2, 100), Some(1));
    }

    #[test]
    fn clamp_index_empty() {
        let phases: [u8; 0] = [];
        assert_eq!(clamped(&phases, 0), None);
        assert_eq!(clamp_index(0, 0), None);
    }
}
