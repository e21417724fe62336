use crate::errors::ValidationError;
use crate::ledger::{self, keys, LedgerStore};
use crate::models::QuizResult;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestion {
    pub id: u32,
    pub question: &'static str,
    pub options: [&'static str; 4],
    #[serde(skip)]
    pub correct_answer: usize,
    pub explanation: &'static str,
}

pub static QUESTIONS: [QuizQuestion; 5] = [
    QuizQuestion {
        id: 1,
        question: "Which of the following is NOT a renewable energy source?",
        options: ["Solar", "Wind", "Natural Gas", "Hydroelectric"],
        correct_answer: 2,
        explanation: "Natural gas is a fossil fuel. Solar, wind and hydroelectric power are renewable.",
    },
    QuizQuestion {
        id: 2,
        question: "What percentage of the Earth's surface is covered by water?",
        options: ["50%", "60%", "70%", "80%"],
        correct_answer: 2,
        explanation: "Roughly 71% of the surface is water, almost all of it in the oceans.",
    },
    QuizQuestion {
        id: 3,
        question: "Which of the following actions reduces your carbon footprint the most?",
        options: [
            "Using paper bags instead of plastic",
            "Taking shorter showers",
            "Eating less meat",
            "Turning off lights when not in use",
        ],
        correct_answer: 2,
        explanation: "Livestock farming emits large amounts of greenhouse gases.",
    },
    QuizQuestion {
        id: 4,
        question: "What is the primary cause of global warming?",
        options: [
            "Solar radiation",
            "Greenhouse gas emissions",
            "Natural climate cycles",
            "Volcanic eruptions",
        ],
        correct_answer: 1,
        explanation: "Emissions from burning fossil fuels drive most of the warming.",
    },
    QuizQuestion {
        id: 5,
        question: "Which of these household items should NOT be put in recycling bins?",
        options: ["Plastic bottles", "Aluminum cans", "Greasy pizza boxes", "Newspaper"],
        correct_answer: 2,
        explanation: "Food residue contaminates the paper stream; compost greasy boxes instead.",
    },
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuizScore {
    pub correct: u32,
    pub total: u32,
}

impl QuizScore {
    pub fn percentage(self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        f64::from(self.correct) / f64::from(self.total) * 100.0
    }
}

/// Scores one answer per question; out-of-range choices simply count as wrong.
pub fn score(questions: &[QuizQuestion], answers: &[usize]) -> Result<QuizScore, ValidationError> {
    if answers.len() != questions.len() {
        return Err(ValidationError::AnswerCount {
            expected: questions.len(),
            got: answers.len(),
        });
    }
    let correct = questions
        .iter()
        .zip(answers)
        .filter(|(question, answer)| question.correct_answer == **answer)
        .count();
    Ok(QuizScore {
        correct: correct as u32,
        total: questions.len() as u32,
    })
}

pub fn feedback(percentage: f64) -> &'static str {
    if percentage >= 80.0 {
        "Excellent! You're an eco expert!"
    } else if percentage >= 60.0 {
        "Good job! You know your environmental facts!"
    } else if percentage >= 40.0 {
        "Not bad! You're on your way to becoming eco-savvy."
    } else {
        "Keep learning! There's more to discover about our environment."
    }
}

/// Oldest first. Falls back to the pre-V2 key when nothing was written under V2.
pub fn load_history<S: LedgerStore + ?Sized>(store: &S) -> Vec<QuizResult> {
    if store.read(keys::QUIZ_HISTORY).is_some() {
        ledger::load(store, keys::QUIZ_HISTORY)
    } else {
        ledger::load(store, keys::QUIZ_HISTORY_LEGACY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::MemoryStore;
    use serde_json::json;

    #[test]
    fn perfect_answers_score_full_marks() {
        let answers: Vec<usize> = QUESTIONS.iter().map(|q| q.correct_answer).collect();
        let result = score(&QUESTIONS, &answers).unwrap();
        assert_eq!(result.correct, 5);
        assert_eq!(result.percentage(), 100.0);
    }

    #[test]
    fn wrong_and_out_of_range_answers_count_as_wrong() {
        let result = score(&QUESTIONS, &[0, 2, 9, 1, 2]).unwrap();
        assert_eq!(result.correct, 3);
        assert_eq!(result.percentage(), 60.0);
    }

    #[test]
    fn answer_count_must_match() {
        assert_eq!(
            score(&QUESTIONS, &[2, 2]),
            Err(ValidationError::AnswerCount { expected: 5, got: 2 })
        );
    }

    #[test]
    fn feedback_bands() {
        assert!(feedback(100.0).starts_with("Excellent"));
        assert!(feedback(60.0).starts_with("Good job"));
        assert!(feedback(40.0).starts_with("Not bad"));
        assert!(feedback(20.0).starts_with("Keep learning"));
    }

    #[test]
    fn legacy_history_is_read_when_v2_absent() {
        let mut store = MemoryStore::new();
        store.insert_raw(
            keys::QUIZ_HISTORY_LEGACY,
            json!([{
                "id": "1714000000000",
                "date": "2024-04-25T10:00:00.000Z",
                "score": 4,
                "totalQuestions": 5,
                "percentageScore": 80
            }]),
        );
        let history = load_history(&store);
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].score, 4);

        store.insert_raw(keys::QUIZ_HISTORY, json!([]));
        assert!(load_history(&store).is_empty());
    }
}
