use crate::constants::{COLOUR_SKILL_MULTIPLIER, COLOUR_STRAIN_DECAY_BASE};
use crate::difficulty::colour::ColourEvaluator;
use crate::difficulty::types::DifficultyEvent;

/// Boundary to the strain aggregator: a skill turns each event into a raw
/// strain and publishes the scaling the aggregator should apply.
pub trait StrainSkill {
    /// Scale applied to every raw strain before aggregation
    const SKILL_MULTIPLIER: f64;

    /// Fraction of accumulated strain left after one second
    const STRAIN_DECAY_BASE: f64;

    fn strain_value_of(&mut self, event: &DifficultyEvent) -> f64;
}

impl StrainSkill for ColourEvaluator {
    const SKILL_MULTIPLIER: f64 = COLOUR_SKILL_MULTIPLIER;
    const STRAIN_DECAY_BASE: f64 = COLOUR_STRAIN_DECAY_BASE;

    fn strain_value_of(&mut self, event: &DifficultyEvent) -> f64 {
        self.evaluate(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::difficulty::types::HitType;

    fn drive<S: StrainSkill>(skill: &mut S, events: &[DifficultyEvent]) -> Vec<f64> {
        events
            .iter()
            .map(|e| skill.strain_value_of(e) * S::SKILL_MULTIPLIER)
            .collect()
    }

    #[test]
    fn colour_skill_matches_direct_evaluation() {
        let events: Vec<DifficultyEvent> = [1, 1, 2, 1]
            .iter()
            .zip([HitType::Centre, HitType::Rim].iter().cycle())
            .flat_map(|(&run, &colour)| (0..run).map(move |_| DifficultyEvent::hit(colour, 80.0)))
            .collect();

        let via_skill = drive(&mut ColourEvaluator::new(), &events);
        let direct = ColourEvaluator::new().evaluate_all(&events);
        assert_eq!(via_skill, direct);
        assert_eq!(ColourEvaluator::SKILL_MULTIPLIER, 1.0);
        assert_eq!(ColourEvaluator::STRAIN_DECAY_BASE, 0.4);
    }
}
