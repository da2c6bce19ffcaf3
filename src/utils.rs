use crate::errors::TriageError;
use hashbrown::HashSet;

/// Create a string of all available items.
pub fn items_to_strings<S: AsRef<str>>(items: &[S]) -> String {
    items.iter().map(|i| i.as_ref()).collect::<Vec<_>>().join(", ")
}

// Validation
/// Every question must appear only once. Any string is a valid question.
pub fn validate_questions<S: AsRef<str>>(questions: &[S]) -> Result<(), TriageError> {
    let mut seen = HashSet::with_capacity(questions.len());
    for q in questions {
        let q = q.as_ref();
        if !seen.insert(q) {
            return Err(TriageError::DuplicateQuestion(q.to_string()));
        }
    }
    Ok(())
}

pub fn validate_depth(depth: usize, n_questions: usize) -> Result<(), TriageError> {
    if depth > n_questions {
        Err(TriageError::InvalidDepth(depth, n_questions))
    } else {
        Ok(())
    }
}

/// Binomial coefficient, `None` on overflow.
pub fn n_combinations(n: usize, k: usize) -> Option<usize> {
    if k > n {
        return Some(0);
    }
    let k = k.min(n - k);
    let mut c: usize = 1;
    for i in 0..k {
        // Exact at every step: c * (n - i) is divisible by (i + 1).
        c = c.checked_mul(n - i)? / (i + 1);
    }
    Some(c)
}
