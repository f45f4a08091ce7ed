//! Session bookkeeping derived from score and play time
//!
//! Fatigue is advisory only: it is recomputed every tick from elapsed time and
//! never feeds back into physics or scoring. Achievements are sticky for the
//! whole process run. Skill rank is a pure score-per-second classification.

use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

/// Time-derived break-encouragement level, in ascending order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FatigueLevel {
    None,
    Mild,
    Moderate,
    Severe,
}

impl FatigueLevel {
    /// User-facing warning, None while fresh
    pub fn message(&self) -> Option<&'static str> {
        match self {
            FatigueLevel::None => None,
            FatigueLevel::Mild => {
                Some("You've been playing for a while. Consider taking a break soon.")
            }
            FatigueLevel::Moderate => Some("Eye strain alert! Take a break and rest your eyes."),
            FatigueLevel::Severe => {
                Some("FATIGUE WARNING: you've been playing a long time. Time to stop!")
            }
        }
    }
}

/// Step function of elapsed play time
pub fn fatigue_level(elapsed: f32, tuning: &Tuning) -> FatigueLevel {
    if elapsed < tuning.fatigue_mild {
        FatigueLevel::None
    } else if elapsed < tuning.fatigue_moderate {
        FatigueLevel::Mild
    } else if elapsed < tuning.fatigue_severe {
        FatigueLevel::Moderate
    } else {
        FatigueLevel::Severe
    }
}

/// Player skill classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SkillLevel {
    pub title: &'static str,
    /// 0 (beginner) through 5
    pub rank: u8,
}

/// Rate the player by score per second of play
pub fn skill_level(score: u64, elapsed: f32) -> SkillLevel {
    if elapsed <= 0.0 {
        return SkillLevel {
            title: "Beginner",
            rank: 0,
        };
    }
    let per_second = score as f32 / elapsed;
    let (title, rank) = if per_second < 2.0 {
        ("Novice Diver", 1)
    } else if per_second < 4.0 {
        ("Skilled Navigator", 2)
    } else if per_second < 6.0 {
        ("Expert Explorer", 3)
    } else if per_second < 8.0 {
        ("Master of the Deep", 4)
    } else {
        ("Legendary Ocean Lord", 5)
    };
    SkillLevel { title, rank }
}

/// One-time milestone flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AchievementKey {
    FirstTreasure,
    Survivor30,
    Survivor60,
    Score100,
    Score500,
}

impl AchievementKey {
    pub const ALL: [AchievementKey; 5] = [
        AchievementKey::FirstTreasure,
        AchievementKey::Survivor30,
        AchievementKey::Survivor60,
        AchievementKey::Score100,
        AchievementKey::Score500,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            AchievementKey::FirstTreasure => "First Treasure!",
            AchievementKey::Survivor30 => "30 Second Survivor",
            AchievementKey::Survivor60 => "Deep Sea Veteran",
            AchievementKey::Score100 => "Century Collector",
            AchievementKey::Score500 => "Ocean Master",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            AchievementKey::FirstTreasure => "Collected your first treasure chest",
            AchievementKey::Survivor30 => "Survived for 30 seconds",
            AchievementKey::Survivor60 => "Survived for 60 seconds",
            AchievementKey::Score100 => "Reached 100 points",
            AchievementKey::Score500 => "Reached 500 points",
        }
    }

    /// Threshold check against the current session snapshot
    fn satisfied(&self, score: u64, elapsed: f32, treasure_collected: bool) -> bool {
        match self {
            AchievementKey::FirstTreasure => treasure_collected,
            AchievementKey::Survivor30 => elapsed >= 30.0,
            AchievementKey::Survivor60 => elapsed >= 60.0,
            AchievementKey::Score100 => score >= 100,
            AchievementKey::Score500 => score >= 500,
        }
    }
}

/// Unlock flags, indexed by `AchievementKey::ALL` order. Once set, a flag
/// never clears within the process run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AchievementSet {
    unlocked: [bool; AchievementKey::ALL.len()],
}

impl AchievementSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_unlocked(&self, key: AchievementKey) -> bool {
        self.unlocked[key as usize]
    }

    pub fn unlocked_count(&self) -> usize {
        self.unlocked.iter().filter(|u| **u).count()
    }

    /// Evaluate thresholds and flip any newly satisfied entries.
    /// Returns the keys that unlocked this call.
    pub fn check(
        &mut self,
        score: u64,
        elapsed: f32,
        treasure_collected: bool,
    ) -> Vec<AchievementKey> {
        let mut newly_unlocked = Vec::new();
        for key in AchievementKey::ALL {
            if !self.is_unlocked(key) && key.satisfied(score, elapsed, treasure_collected) {
                self.unlocked[key as usize] = true;
                newly_unlocked.push(key);
            }
        }
        newly_unlocked
    }
}

/// Transient unlock toast, expires after `tuning.notification_secs` of play
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub key: AchievementKey,
    /// Elapsed play time when the unlock happened
    pub unlocked_at: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fatigue_steps_at_each_threshold() {
        let tuning = Tuning::default();
        let cases = [
            (0.0, FatigueLevel::None),
            (89.9, FatigueLevel::None),
            (90.0, FatigueLevel::Mild),
            (100.0, FatigueLevel::Mild),
            (120.0, FatigueLevel::Moderate),
            (150.0, FatigueLevel::Moderate),
            (180.0, FatigueLevel::Severe),
            (1000.0, FatigueLevel::Severe),
        ];
        for (t, expected) in cases {
            assert_eq!(fatigue_level(t, &tuning), expected, "t={t}");
        }
    }

    #[test]
    fn fatigue_messages_escalate() {
        assert!(FatigueLevel::None.message().is_none());
        assert!(FatigueLevel::Severe.message().is_some());
        assert!(FatigueLevel::Mild < FatigueLevel::Moderate);
    }

    #[test]
    fn skill_rank_tracks_score_per_second() {
        assert_eq!(skill_level(0, 0.0).rank, 0);
        assert_eq!(skill_level(50, 60.0).rank, 1); // 0.83/s
        assert_eq!(skill_level(180, 60.0).rank, 2); // 3/s
        assert_eq!(skill_level(300, 60.0).rank, 3); // 5/s
        assert_eq!(skill_level(420, 60.0).rank, 4); // 7/s
        assert_eq!(skill_level(600, 60.0).rank, 5); // 10/s
        assert_eq!(skill_level(600, 60.0).title, "Legendary Ocean Lord");
    }

    #[test]
    fn achievements_unlock_once_and_stick() {
        let mut set = AchievementSet::new();
        let newly = set.check(100, 30.0, false);
        assert_eq!(
            newly,
            vec![AchievementKey::Survivor30, AchievementKey::Score100]
        );

        // Same thresholds satisfied again: nothing new
        assert!(set.check(150, 40.0, false).is_empty());

        // Score and time falling back (new run) must not re-lock anything
        assert!(set.check(0, 0.0, false).is_empty());
        assert!(set.is_unlocked(AchievementKey::Score100));
        assert_eq!(set.unlocked_count(), 2);
    }

    #[test]
    fn treasure_flag_drives_first_treasure() {
        let mut set = AchievementSet::new();
        assert!(set.check(50, 1.0, false).is_empty());
        assert_eq!(set.check(50, 1.0, true), vec![AchievementKey::FirstTreasure]);
    }
}
