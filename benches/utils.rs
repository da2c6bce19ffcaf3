#![allow(dead_code)]
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use triage::Record;

pub(crate) const ILLNESSES: [&str; 6] = ["flu", "cold", "measles", "migraine", "covid", "healthy"];

pub(crate) fn symptoms(n_symptoms: usize) -> Vec<String> {
    (0..n_symptoms).map(|i| format!("symptom_{}", i)).collect()
}

// Each illness has a preferred subset of symptoms, observed with high
// probability, plus background noise on the rest.
pub(crate) fn create_records(n_records: usize, n_symptoms: usize) -> Vec<Record> {
    // reproducible seed
    let mut rng = StdRng::seed_from_u64(1903);
    let symptoms = symptoms(n_symptoms);
    (0..n_records)
        .map(|_| {
            let label = rng.gen_range(0..ILLNESSES.len());
            let features: Vec<&String> = symptoms
                .iter()
                .enumerate()
                .filter(|(i, _)| {
                    let p = if i % ILLNESSES.len() == label { 0.8 } else { 0.2 };
                    rng.gen_bool(p)
                })
                .map(|(_, s)| s)
                .collect();
            Record::new(ILLNESSES[label], features.into_iter().cloned())
        })
        .collect()
}
