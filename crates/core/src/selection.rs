use indexmap::IndexSet;

use crate::prompt::PromptId;

/// Ordered set of selected prompt ids.
///
/// Ids keep the order in which they were selected; that order is the order
/// used when composing the master prompt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
	ids: IndexSet<PromptId>,
}

impl Selection {
	pub fn new() -> Self {
		Self::default()
	}

	/// Select `id` if absent (appending it), otherwise deselect it.
	///
	/// Returns whether `id` is selected afterwards.
	pub fn toggle(&mut self, id: PromptId) -> bool {
		if self.ids.shift_remove(&id) {
			false
		} else {
			self.ids.insert(id);
			true
		}
	}

	pub fn clear(&mut self) {
		self.ids.clear();
	}

	pub fn is_selected(&self, id: PromptId) -> bool {
		self.ids.contains(&id)
	}

	/// Selected ids, oldest selection first.
	pub fn ids(&self) -> impl ExactSizeIterator<Item = PromptId> + '_ {
		self.ids.iter().copied()
	}

	pub fn len(&self) -> usize {
		self.ids.len()
	}

	pub fn is_empty(&self) -> bool {
		self.ids.is_empty()
	}

	/// Keep only ids for which `keep` returns true, preserving order.
	pub fn retain(&mut self, mut keep: impl FnMut(PromptId) -> bool) {
		self.ids.retain(|id| keep(*id));
	}
}

impl FromIterator<PromptId> for Selection {
	/// Toggle each id in turn, so a repeated id ends up deselected.
	fn from_iter<I: IntoIterator<Item = PromptId>>(iter: I) -> Self {
		let mut selection = Self::new();
		for id in iter {
			selection.toggle(id);
		}
		selection
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn ids(selection: &Selection) -> Vec<u64> {
		selection.ids().map(|id| id.0).collect()
	}

	#[test]
	fn toggle_appends_then_removes() {
		let mut selection = Selection::new();
		assert!(selection.toggle(PromptId(2)));
		assert!(selection.toggle(PromptId(1)));
		assert_eq!(ids(&selection), [2, 1]);

		assert!(!selection.toggle(PromptId(2)));
		assert_eq!(ids(&selection), [1]);
		assert!(!selection.is_selected(PromptId(2)));
	}

	#[test]
	fn toggle_twice_restores_state() {
		let mut selection: Selection = [3, 1, 4].into_iter().map(PromptId).collect();
		let before = selection.clone();
		for id in [1, 9] {
			selection.toggle(PromptId(id));
			selection.toggle(PromptId(id));
			assert_eq!(selection, before);
		}
	}

	#[test]
	fn removing_from_the_middle_keeps_order() {
		let mut selection: Selection = [5, 6, 7].into_iter().map(PromptId).collect();
		selection.toggle(PromptId(6));
		assert_eq!(ids(&selection), [5, 7]);
		selection.toggle(PromptId(6));
		assert_eq!(ids(&selection), [5, 7, 6]);
	}

	#[test]
	fn clear_empties_any_selection() {
		let mut selection: Selection = (1..=50).map(PromptId).collect();
		selection.clear();
		assert!(selection.is_empty());

		let mut empty = Selection::new();
		empty.clear();
		assert!(empty.is_empty());
	}

	#[test]
	fn collecting_a_repeated_id_deselects_it() {
		let selection: Selection = [1, 2, 1].into_iter().map(PromptId).collect();
		assert_eq!(ids(&selection), [2]);
	}

	#[test]
	fn retain_drops_unknown_ids() {
		let mut selection: Selection = [1, 2, 3].into_iter().map(PromptId).collect();
		selection.retain(|id| id != PromptId(2));
		assert_eq!(ids(&selection), [1, 3]);
	}
}
