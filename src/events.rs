//! Event System
//!
//! Types and implementations for loader events and activity logging

use crate::error_classifier::LogLevel;
use crate::logging::should_log_with_env;
use chrono::Local;
use std::fmt::Display;

/// The data section or user action an event originates from.
#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum Section {
    /// Aggregated user profile (subscription, wallet, achievements).
    Profile,
    /// Module listing for the learning-progress card.
    Modules,
    /// Completed/total progress summary.
    Progress,
    /// Points balance and level.
    Points,
    /// Single module detail (lesson content and questions).
    Lesson,
    /// Quiz submission and grading.
    Quiz,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum EventType {
    Success,
    Error,
    Refresh,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Event {
    pub section: Section,
    pub msg: String,
    pub timestamp: String,
    pub event_type: EventType,
    pub log_level: LogLevel,
}

impl Event {
    pub fn new(section: Section, msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self {
            section,
            msg,
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            event_type,
            log_level,
        }
    }

    pub fn success(section: Section, msg: String) -> Self {
        Self::new(section, msg, EventType::Success, LogLevel::Info)
    }

    pub fn error(section: Section, msg: String, log_level: LogLevel) -> Self {
        Self::new(section, msg, EventType::Error, log_level)
    }

    pub fn refresh(section: Section, msg: String) -> Self {
        Self::new(section, msg, EventType::Refresh, LogLevel::Info)
    }

    pub fn should_display(&self) -> bool {
        // Always show success events and info level events
        if self.event_type == EventType::Success || self.log_level >= LogLevel::Info {
            return true;
        }
        should_log_with_env(self.log_level)
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}] {}", self.event_type, self.timestamp, self.msg)
    }
}
