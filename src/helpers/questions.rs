use std::fmt::{self, Display, Formatter};

#[derive(
    Debug, Default, PartialEq, Eq, Hash, Copy, Clone, serde::Deserialize, serde::Serialize,
)]
pub enum Operator {
    #[default]
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    pub fn iter() -> impl Iterator<Item = Self> {
        use Operator::*;
        [Add, Subtract, Multiply, Divide].iter().copied()
    }

    /// Apply the operator. `None` when the result would not be a whole
    /// number (inexact division), the divisor is zero, or the arithmetic
    /// overflows.
    pub fn apply(&self, lhs: i64, rhs: i64) -> Option<i64> {
        match self {
            Operator::Add => lhs.checked_add(rhs),
            Operator::Subtract => lhs.checked_sub(rhs),
            Operator::Multiply => lhs.checked_mul(rhs),
            Operator::Divide => match lhs.checked_rem(rhs) {
                Some(0) => lhs.checked_div(rhs),
                _ => None,
            },
        }
    }
}

impl Display for Operator {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Operator::Add => write!(f, "+"),
            Operator::Subtract => write!(f, "-"),
            Operator::Multiply => write!(f, "×"),
            Operator::Divide => write!(f, "÷"),
        }
    }
}

/// A single authored question. Arithmetic questions compute their own
/// answer; multiple-choice questions carry the index of the correct choice.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Question {
    Arithmetic {
        lhs: i64,
        op: Operator,
        rhs: i64,
    },
    MultipleChoice {
        prompt: String,
        choices: Vec<String>,
        correct: usize,
    },
}

/// An answer as entered while taking a test.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Answer {
    Number(i64),
    Choice(usize),
}

impl Question {
    pub fn prompt(&self) -> String {
        match self {
            Question::Arithmetic { lhs, op, rhs } => format!("What is {} {} {}?", lhs, op, rhs),
            Question::MultipleChoice { prompt, .. } => prompt.clone(),
        }
    }

    /// Grade an answer. A mismatched answer kind is simply wrong.
    pub fn grade(&self, answer: &Answer) -> bool {
        match (self, answer) {
            (Question::Arithmetic { lhs, op, rhs }, Answer::Number(n)) => {
                op.apply(*lhs, *rhs) == Some(*n)
            }
            (Question::MultipleChoice { correct, .. }, Answer::Choice(picked)) => picked == correct,
            _ => false,
        }
    }
}

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct QuestionBank {
    pub items: Vec<Question>,
}

impl QuestionBank {
    pub fn add(&mut self, question: Question) {
        log::debug!("Adding question: {}", question.prompt());
        self.items.push(question);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// A named test assembled from the bank. Questions are snapshotted at
/// assembly time, so later bank edits do not change an existing test.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Test {
    pub name: String,
    pub questions: Vec<Question>,
}

impl Test {
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct TestCollection {
    pub items: Vec<Test>,
}

impl TestCollection {
    /// Saving under an existing name replaces that test.
    pub fn upsert(&mut self, test: Test) {
        match self.items.iter_mut().find(|t| t.name == test.name) {
            Some(existing) => *existing = test,
            None => self.items.push(test),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AnswerRecord {
    pub prompt: String,
    pub given: String,
    pub correct: bool,
}

/// One finished run through a test.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CompletedTest {
    pub test_name: String,
    pub taken: chrono::DateTime<chrono::Utc>,
    pub records: Vec<AnswerRecord>,
}

impl CompletedTest {
    pub fn correct(&self) -> usize {
        self.records.iter().filter(|r| r.correct).count()
    }

    pub fn total(&self) -> usize {
        self.records.len()
    }

    pub fn percent(&self) -> u32 {
        if self.records.is_empty() {
            return 0;
        }
        (self.correct() * 100 / self.total()) as u32
    }
}

impl Display for CompletedTest {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}/{}", self.test_name, self.correct(), self.total())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn divide_is_only_valid_when_exact() {
        assert_eq!(Operator::Divide.apply(12, 4), Some(3));
        assert_eq!(Operator::Divide.apply(12, 5), None);
        assert_eq!(Operator::Divide.apply(12, 0), None);
        assert_eq!(Operator::Divide.apply(-12, 3), Some(-4));
    }

    #[test]
    fn grade_arithmetic() {
        let q = Question::Arithmetic {
            lhs: 7,
            op: Operator::Multiply,
            rhs: 6,
        };
        assert!(q.grade(&Answer::Number(42)));
        assert!(!q.grade(&Answer::Number(41)));
        assert!(!q.grade(&Answer::Choice(0)));
    }

    #[test]
    fn grade_multiple_choice() {
        let q = Question::MultipleChoice {
            prompt: "Largest planet?".to_string(),
            choices: vec!["Mars".to_string(), "Jupiter".to_string()],
            correct: 1,
        };
        assert!(q.grade(&Answer::Choice(1)));
        assert!(!q.grade(&Answer::Choice(0)));
        assert!(!q.grade(&Answer::Number(1)));
    }

    #[test]
    fn prompts_render_the_operator_symbol() {
        let q = Question::Arithmetic {
            lhs: 144,
            op: Operator::Divide,
            rhs: 12,
        };
        assert_eq!(q.prompt(), "What is 144 ÷ 12?");
        assert!(q.grade(&Answer::Number(12)));
    }

    #[test]
    fn upsert_replaces_by_name() {
        let mut tests = TestCollection::default();
        let q = Question::Arithmetic {
            lhs: 1,
            op: Operator::Add,
            rhs: 1,
        };
        tests.upsert(Test {
            name: "Week 1".to_string(),
            questions: vec![q.clone()],
        });
        tests.upsert(Test {
            name: "Week 1".to_string(),
            questions: vec![q.clone(), q],
        });
        assert_eq!(tests.len(), 1);
        assert_eq!(tests.items[0].len(), 2);
    }

    #[test]
    fn assembled_test_is_a_snapshot() {
        let mut bank = QuestionBank::default();
        bank.add(Question::Arithmetic {
            lhs: 2,
            op: Operator::Add,
            rhs: 2,
        });
        let test = Test {
            name: "Snapshot".to_string(),
            questions: bank.items.clone(),
        };
        bank.items.clear();
        assert_eq!(test.len(), 1);
    }

    #[test]
    fn completed_test_scoring() {
        let done = CompletedTest {
            test_name: "Week 1".to_string(),
            taken: chrono::Utc::now(),
            records: vec![
                AnswerRecord {
                    prompt: "What is 2 + 2?".to_string(),
                    given: "4".to_string(),
                    correct: true,
                },
                AnswerRecord {
                    prompt: "What is 3 - 1?".to_string(),
                    given: "5".to_string(),
                    correct: false,
                },
            ],
        };
        assert_eq!(done.correct(), 1);
        assert_eq!(done.percent(), 50);
        assert_eq!(done.to_string(), "Week 1: 1/2");
    }
}
