//! Question and Choice entities

use super::validation::{validate_choice_text, validate_title};
use super::value_objects::{ChoiceId, QuestionId};
use crate::core::error::DomainError;
use serde::Serialize;

/// An answer option belonging to a [`Question`] (Entity)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Choice {
    id: ChoiceId,
    text: String,
    is_correct: bool,
}

impl Choice {
    pub fn id(&self) -> ChoiceId {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_correct(&self) -> bool {
        self.is_correct
    }
}

/// A multiple-choice quiz question (Entity)
///
/// Owns an ordered list of [`Choice`]s. Every mutator either succeeds
/// completely or returns a [`DomainError`] and leaves the question untouched.
///
/// # Example
///
/// ```
/// use quiz_domain::{ChoiceId, Question};
///
/// let mut question = Question::new("Which are primes?").unwrap().with_max_selections(2);
/// question.add_choice("4", false).unwrap();
/// question.add_choice("5", true).unwrap();
/// question.add_choice("7", true).unwrap();
///
/// let picked = question.select_choices(&[ChoiceId::new(1), ChoiceId::new(3)]).unwrap();
/// assert_eq!(picked, vec![ChoiceId::new(3)]);
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct Question {
    id: QuestionId,
    title: String,
    points: i32,
    max_selections: u32,
    choices: Vec<Choice>,
}

impl Question {
    pub const DEFAULT_POINTS: i32 = 1;
    pub const DEFAULT_MAX_SELECTIONS: u32 = 1;

    /// Create a question with default points and max selections.
    ///
    /// Fails if the title is empty or longer than 200 characters.
    pub fn new(title: impl Into<String>) -> Result<Self, DomainError> {
        let title = title.into();
        validate_title(&title)?;
        Ok(Self {
            id: QuestionId::generate(),
            title,
            points: Self::DEFAULT_POINTS,
            max_selections: Self::DEFAULT_MAX_SELECTIONS,
            choices: Vec::new(),
        })
    }

    pub fn with_points(mut self, points: i32) -> Self {
        self.points = points;
        self
    }

    pub fn with_max_selections(mut self, max_selections: u32) -> Self {
        self.max_selections = max_selections;
        self
    }

    pub fn id(&self) -> QuestionId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn points(&self) -> i32 {
        self.points
    }

    pub fn max_selections(&self) -> u32 {
        self.max_selections
    }

    /// Choices in insertion order
    pub fn choices(&self) -> &[Choice] {
        &self.choices
    }

    pub fn choice(&self, id: ChoiceId) -> Option<&Choice> {
        self.choices.iter().find(|c| c.id == id)
    }

    /// Ids of every choice currently marked correct, in list order
    pub fn correct_choice_ids(&self) -> Vec<ChoiceId> {
        self.choices
            .iter()
            .filter(|c| c.is_correct)
            .map(|c| c.id)
            .collect()
    }

    /// Append a choice and return its id.
    ///
    /// Without prior removals the n-th added choice gets id n. After a
    /// removal the new id is one past the highest remaining id, so ids are
    /// never reused while a choice still holds them.
    pub fn add_choice(
        &mut self,
        text: impl Into<String>,
        is_correct: bool,
    ) -> Result<ChoiceId, DomainError> {
        let text = text.into();
        validate_choice_text(&text)?;

        let id = ChoiceId::new(self.next_choice_id());
        self.choices.push(Choice {
            id,
            text,
            is_correct,
        });
        Ok(id)
    }

    /// Remove the choice with `id`; remaining choices keep their ids and order.
    pub fn remove_choice_by_id(&mut self, id: ChoiceId) -> Result<(), DomainError> {
        let index = self
            .choices
            .iter()
            .position(|c| c.id == id)
            .ok_or(DomainError::ChoiceNotFound(id))?;
        self.choices.remove(index);
        Ok(())
    }

    pub fn remove_all_choices(&mut self) {
        self.choices.clear();
    }

    /// Return the selected ids that point at correct choices, in input order.
    ///
    /// Fails when more ids are given than there are choices. Unknown ids and
    /// ids of incorrect choices are dropped without error. `max_selections`
    /// is not checked here.
    pub fn select_choices(&self, selected: &[ChoiceId]) -> Result<Vec<ChoiceId>, DomainError> {
        if selected.len() > self.choices.len() {
            return Err(DomainError::TooManySelections {
                selected: selected.len(),
                available: self.choices.len(),
            });
        }

        Ok(selected
            .iter()
            .copied()
            .filter(|id| self.choice(*id).is_some_and(Choice::is_correct))
            .collect())
    }

    /// Mark every listed choice correct, leaving the others unchanged.
    ///
    /// All ids are checked before anything is modified.
    pub fn set_correct_choices(&mut self, ids: &[ChoiceId]) -> Result<(), DomainError> {
        if let Some(missing) = ids.iter().find(|id| self.choice(**id).is_none()) {
            return Err(DomainError::ChoiceNotFound(*missing));
        }

        for choice in self.choices.iter_mut().filter(|c| ids.contains(&c.id)) {
            choice.is_correct = true;
        }
        Ok(())
    }

    fn next_choice_id(&self) -> u32 {
        self.choices.iter().map(|c| c.id.value()).max().unwrap_or(0) + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::question::validation::{CHOICE_TEXT_MAX_CHARS, TITLE_MAX_CHARS};

    // ==================== Helpers ====================

    fn ids(raw: &[u32]) -> Vec<ChoiceId> {
        raw.iter().copied().map(ChoiceId::new).collect()
    }

    fn snapshot(question: &Question) -> Vec<(u32, &str, bool)> {
        question
            .choices()
            .iter()
            .map(|c| (c.id().value(), c.text(), c.is_correct()))
            .collect()
    }

    fn abc_question() -> Question {
        let mut question = Question::new("q1").unwrap();
        question.add_choice("a", false).unwrap();
        question.add_choice("b", true).unwrap();
        question.add_choice("c", false).unwrap();
        question
    }

    fn six_choice_question() -> Question {
        let mut question = Question::new("q1").unwrap().with_max_selections(3);
        for (text, correct) in [
            ("a", false),
            ("b", true),
            ("c", true),
            ("d", false),
            ("e", true),
            ("f", false),
        ] {
            question.add_choice(text, correct).unwrap();
        }
        question
    }

    // ==================== Construction ====================

    #[test]
    fn test_create_question_defaults() {
        let question = Question::new("q1").unwrap();
        assert_eq!(question.title(), "q1");
        assert_eq!(question.points(), 1);
        assert_eq!(question.max_selections(), 1);
        assert!(question.choices().is_empty());
    }

    #[test]
    fn test_question_ids_are_unique() {
        let q1 = Question::new("q1").unwrap();
        let q2 = Question::new("q2").unwrap();
        assert_ne!(q1.id(), q2.id());
    }

    #[test]
    fn test_create_question_with_invalid_title() {
        assert!(Question::new("").is_err());
        assert!(Question::new("a".repeat(TITLE_MAX_CHARS + 1)).is_err());
        assert!(Question::new("a".repeat(500)).is_err());
        assert!(Question::new("a".repeat(TITLE_MAX_CHARS)).is_ok());
    }

    #[test]
    fn test_points_and_max_selections_accept_any_value() {
        let question = Question::new("q1").unwrap().with_points(100);
        assert_eq!(question.points(), 100);

        let question = Question::new("q1")
            .unwrap()
            .with_points(-5)
            .with_max_selections(0);
        assert_eq!(question.points(), -5);
        assert_eq!(question.max_selections(), 0);
    }

    // ==================== add_choice ====================

    #[test]
    fn test_add_single_choice() {
        let mut question = Question::new("q1").unwrap();
        let id = question.add_choice("a", false).unwrap();

        assert_eq!(id, ChoiceId::new(1));
        assert_eq!(snapshot(&question), vec![(1, "a", false)]);
    }

    #[test]
    fn test_add_multiple_choices_assigns_sequential_ids() {
        let question = abc_question();
        assert_eq!(
            snapshot(&question),
            vec![(1, "a", false), (2, "b", true), (3, "c", false)]
        );
    }

    #[test]
    fn test_add_choice_with_invalid_text_leaves_choices_unchanged() {
        let mut question = abc_question();

        let err = question.add_choice("", false).unwrap_err();
        assert_eq!(err, DomainError::InvalidChoiceText { length: 0, max: 100 });
        assert!(
            question
                .add_choice("a".repeat(CHOICE_TEXT_MAX_CHARS + 1), true)
                .is_err()
        );

        assert_eq!(question.choices().len(), 3);
        assert!(question.add_choice("a".repeat(CHOICE_TEXT_MAX_CHARS), true).is_ok());
    }

    #[test]
    fn test_add_after_removal_does_not_reuse_live_id() {
        let mut question = abc_question();
        question.remove_choice_by_id(ChoiceId::new(2)).unwrap();

        let id = question.add_choice("d", false).unwrap();
        assert_eq!(id, ChoiceId::new(4));
        assert_eq!(
            snapshot(&question),
            vec![(1, "a", false), (3, "c", false), (4, "d", false)]
        );
    }

    #[test]
    fn test_ids_restart_after_remove_all() {
        let mut question = abc_question();
        question.remove_all_choices();
        assert_eq!(question.add_choice("z", false).unwrap(), ChoiceId::new(1));
    }

    // ==================== remove ====================

    #[test]
    fn test_remove_choice_by_id_keeps_others() {
        let mut question = abc_question();
        question.remove_choice_by_id(ChoiceId::new(2)).unwrap();

        assert_eq!(question.choices().len(), 2);
        assert_eq!(snapshot(&question), vec![(1, "a", false), (3, "c", false)]);
    }

    #[test]
    fn test_remove_choice_by_missing_id_fails() {
        let mut question = abc_question();
        let err = question.remove_choice_by_id(ChoiceId::new(4)).unwrap_err();

        assert_eq!(err, DomainError::ChoiceNotFound(ChoiceId::new(4)));
        assert_eq!(question.choices().len(), 3);
    }

    #[test]
    fn test_remove_all_choices() {
        let mut question = abc_question();
        question.remove_all_choices();
        assert!(question.choices().is_empty());

        // Clearing an empty list is fine too
        question.remove_all_choices();
        assert!(question.choices().is_empty());
    }

    // ==================== select_choices ====================

    #[test]
    fn test_select_more_ids_than_choices_fails() {
        let mut question = Question::new("q1").unwrap();
        question.add_choice("a", false).unwrap();

        let err = question.select_choices(&ids(&[1, 2])).unwrap_err();
        assert_eq!(
            err,
            DomainError::TooManySelections {
                selected: 2,
                available: 1
            }
        );
    }

    #[test]
    fn test_select_correct_and_incorrect_single_id() {
        let mut question = Question::new("q1").unwrap();
        question.add_choice("a", false).unwrap();
        question.add_choice("b", true).unwrap();

        assert_eq!(question.select_choices(&ids(&[2])).unwrap(), ids(&[2]));
        assert!(question.select_choices(&ids(&[1])).unwrap().is_empty());
    }

    #[test]
    fn test_select_multiple_correct_ids() {
        let question = six_choice_question();
        assert_eq!(
            question.select_choices(&ids(&[2, 3, 5])).unwrap(),
            ids(&[2, 3, 5])
        );
    }

    #[test]
    fn test_select_mixed_ids_keeps_only_correct() {
        let question = six_choice_question();
        assert_eq!(question.select_choices(&ids(&[2, 4, 6])).unwrap(), ids(&[2]));
    }

    #[test]
    fn test_select_preserves_input_order_and_ignores_unknown() {
        let question = six_choice_question();
        assert_eq!(
            question.select_choices(&ids(&[5, 99, 2])).unwrap(),
            ids(&[5, 2])
        );
    }

    #[test]
    fn test_select_ignores_max_selections() {
        // max_selections is 1 by default, but selecting two is not an error
        let mut question = Question::new("q1").unwrap();
        question.add_choice("a", true).unwrap();
        question.add_choice("b", true).unwrap();

        assert_eq!(question.select_choices(&ids(&[1, 2])).unwrap(), ids(&[1, 2]));
    }

    // ==================== set_correct_choices ====================

    #[test]
    fn test_set_correct_choices() {
        let mut question = Question::new("q1").unwrap();
        for text in ["a", "b", "c", "d"] {
            question.add_choice(text, false).unwrap();
        }

        question.set_correct_choices(&ids(&[2, 3])).unwrap();
        assert_eq!(question.correct_choice_ids(), ids(&[2, 3]));
    }

    #[test]
    fn test_set_correct_choices_does_not_reset_others() {
        let mut question = abc_question();
        question.set_correct_choices(&ids(&[3])).unwrap();
        assert_eq!(question.correct_choice_ids(), ids(&[2, 3]));
    }

    #[test]
    fn test_set_correct_choices_with_invalid_id() {
        let mut question = Question::new("q1").unwrap();
        question.add_choice("a", false).unwrap();
        question.add_choice("b", false).unwrap();

        let err = question.set_correct_choices(&ids(&[3])).unwrap_err();
        assert_eq!(err, DomainError::ChoiceNotFound(ChoiceId::new(3)));
    }

    #[test]
    fn test_set_correct_choices_is_all_or_nothing() {
        let mut question = Question::new("q1").unwrap();
        question.add_choice("a", false).unwrap();
        question.add_choice("b", false).unwrap();

        assert!(question.set_correct_choices(&ids(&[1, 3])).is_err());
        assert!(question.correct_choice_ids().is_empty());
    }

    // ==================== Serialization ====================

    #[test]
    fn test_question_serializes_choices() {
        let question = abc_question();
        let json = serde_json::to_value(&question).unwrap();

        assert_eq!(json["title"], "q1");
        assert_eq!(json["choices"][1]["id"], 2);
        assert_eq!(json["choices"][1]["is_correct"], true);
    }
}
