use std::collections::{HashMap, HashSet};

use crate::{
    models::domain::{Quiz, QuestionKind},
    models::dto::request::{QuestionAnswerInput, SubmitAnswersRequest},
    models::dto::response::GradeResponse,
};

/// Scores a submission against a quiz. Pure logic, no storage access:
/// the caller fetches the quiz and hands it in.
pub struct GradingService;

impl GradingService {
    /// One point per question answered exactly right.
    ///
    /// Single-choice: exactly one id submitted and it is in the
    /// correct-answer set. Multiple-choice: the submitted id set equals
    /// the correct-answer set (strict, no partial credit). A question
    /// with no submission scores zero; submissions for unknown question
    /// ids are ignored.
    pub fn grade(quiz: &Quiz, submission: &SubmitAnswersRequest) -> GradeResponse {
        let selections: HashMap<&str, &QuestionAnswerInput> = submission
            .answers
            .iter()
            .map(|input| (input.question_id.as_str(), input))
            .collect();

        let mut score = 0;
        for question in &quiz.questions {
            let correct: HashSet<&str> = question.correct_answer_ids().into_iter().collect();

            let Some(input) = selections.get(question.id.as_str()) else {
                continue;
            };

            let awarded = match question.kind {
                QuestionKind::Single => {
                    input.selected_answer_ids.len() == 1
                        && correct.contains(input.selected_answer_ids[0].as_str())
                }
                QuestionKind::Multiple => {
                    // Duplicates collapse before comparison
                    let selected: HashSet<&str> = input
                        .selected_answer_ids
                        .iter()
                        .map(String::as_str)
                        .collect();
                    selected == correct
                }
            };

            if awarded {
                score += 1;
            }
        }

        GradeResponse {
            quiz_id: quiz.id.clone(),
            score,
            total_questions: quiz.question_count(),
        }
    }
}
