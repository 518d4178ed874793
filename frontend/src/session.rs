//! Session controller.
//!
//! `SessionState::apply` is a pure transition function: it consumes the current
//! state and one event and returns the next state plus, at most, one request
//! for the caller to run. Every request carries the generation it was issued
//! under; completions from an older generation are dropped.

use crate::models::{CalculatorReport, ChatMessage, FullReport, UserInput};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Generating,
    Ready,
    Replying,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub enum SessionEvent {
    Submit(UserInput),
    ReportReady { generation: u64, report: FullReport },
    ReportFailed { generation: u64, message: String },
    SendMessage(String),
    ReplyReady { generation: u64, text: String },
    ReplyFailed { generation: u64 },
}

#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    RequestReport {
        generation: u64,
        input: UserInput,
    },
    RequestReply {
        generation: u64,
        input: UserInput,
        report: CalculatorReport,
        history: Vec<ChatMessage>,
        message: String,
    },
}

#[derive(Clone, Debug, PartialEq, Default)]
pub struct SessionState {
    pub phase: Phase,
    pub input: Option<UserInput>,
    pub report: Option<FullReport>,
    pub transcript: Vec<ChatMessage>,
    pub error: Option<String>,
    pub generation: u64,
}

impl SessionState {
    pub fn is_generating(&self) -> bool {
        self.phase == Phase::Generating
    }

    pub fn is_replying(&self) -> bool {
        self.phase == Phase::Replying
    }

    pub fn apply(mut self, event: SessionEvent) -> (SessionState, Option<Effect>) {
        match event {
            SessionEvent::Submit(input) => {
                if self.phase == Phase::Generating {
                    tracing::debug!("submit ignored, report already in flight");
                    return (self, None);
                }
                self.generation += 1;
                self.phase = Phase::Generating;
                self.report = None;
                self.transcript.clear();
                self.error = None;
                self.input = Some(input.clone());
                tracing::info!(generation = self.generation, "report requested");
                let effect = Effect::RequestReport {
                    generation: self.generation,
                    input,
                };
                (self, Some(effect))
            }

            SessionEvent::ReportReady { generation, report } => {
                if !self.expects(generation, Phase::Generating) {
                    return (self, None);
                }
                tracing::info!(generation, "report ready");
                self.transcript = vec![ChatMessage::assistant(report.advisor_mode.clone())];
                self.report = Some(report);
                self.phase = Phase::Ready;
                (self, None)
            }

            SessionEvent::ReportFailed {
                generation,
                message,
            } => {
                if !self.expects(generation, Phase::Generating) {
                    return (self, None);
                }
                tracing::warn!(generation, "report generation failed");
                self.error = Some(message);
                self.phase = Phase::Error;
                (self, None)
            }

            SessionEvent::SendMessage(text) => {
                if text.trim().is_empty() || self.phase != Phase::Ready {
                    return (self, None);
                }
                let report = self.report.as_ref().map(|r| r.calculator_mode.clone());
                let (Some(input), Some(report)) = (self.input.clone(), report) else {
                    return (self, None);
                };
                let effect = Effect::RequestReply {
                    generation: self.generation,
                    input,
                    report,
                    history: self.transcript.clone(),
                    message: text.clone(),
                };
                self.transcript.push(ChatMessage::user(text));
                self.phase = Phase::Replying;
                tracing::info!(generation = self.generation, "follow-up question sent");
                (self, Some(effect))
            }

            SessionEvent::ReplyReady { generation, text } => {
                if !self.expects(generation, Phase::Replying) {
                    return (self, None);
                }
                self.transcript.push(ChatMessage::assistant(text));
                self.phase = Phase::Ready;
                (self, None)
            }

            SessionEvent::ReplyFailed { generation } => {
                if !self.expects(generation, Phase::Replying) {
                    return (self, None);
                }
                tracing::warn!(generation, "advisor reply failed");
                self.transcript
                    .push(ChatMessage::assistant(crate::service::ADVISOR_APOLOGY));
                self.phase = Phase::Ready;
                (self, None)
            }
        }
    }

    fn expects(&self, generation: u64, phase: Phase) -> bool {
        let current = generation == self.generation && self.phase == phase;
        if !current {
            tracing::info!(
                generation,
                current = self.generation,
                "discarding stale response"
            );
        }
        current
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;
    use crate::service::tests::{sample_input, sample_report_json};
    use crate::service::ADVISOR_APOLOGY;

    fn report() -> FullReport {
        serde_json::from_value(sample_report_json()).unwrap()
    }

    fn ready() -> SessionState {
        let (s, _) = SessionState::default().apply(SessionEvent::Submit(sample_input()));
        let (s, _) = s.apply(SessionEvent::ReportReady {
            generation: 1,
            report: report(),
        });
        s
    }

    #[test]
    fn submit_requests_report_and_clears_previous_session() {
        let mut state = ready();
        state.transcript.push(ChatMessage::user("old"));

        let (state, effect) = state.apply(SessionEvent::Submit(sample_input()));
        assert_eq!(state.phase, Phase::Generating);
        assert!(state.report.is_none());
        assert!(state.transcript.is_empty());
        assert!(state.error.is_none());
        assert_eq!(state.generation, 2);
        assert_eq!(
            effect,
            Some(Effect::RequestReport {
                generation: 2,
                input: sample_input()
            })
        );
    }

    #[test]
    fn report_success_seeds_transcript() {
        let state = ready();
        assert_eq!(state.phase, Phase::Ready);
        assert!(state.error.is_none());
        assert_eq!(state.transcript.len(), 1);
        assert_eq!(state.transcript[0].role, Role::Assistant);
        assert_eq!(state.transcript[0].content, report().advisor_mode);
    }

    #[test]
    fn report_failure_leaves_report_empty() {
        let (s, _) = SessionState::default().apply(SessionEvent::Submit(sample_input()));
        let (s, effect) = s.apply(SessionEvent::ReportFailed {
            generation: 1,
            message: "nope".into(),
        });
        assert_eq!(s.phase, Phase::Error);
        assert_eq!(s.error.as_deref(), Some("nope"));
        assert!(s.report.is_none());
        assert!(s.transcript.is_empty());
        assert!(effect.is_none());
    }

    #[test]
    fn second_submit_while_generating_is_ignored() {
        let (s, _) = SessionState::default().apply(SessionEvent::Submit(sample_input()));
        let (s, effect) = s.apply(SessionEvent::Submit(sample_input()));
        assert!(effect.is_none());
        assert_eq!(s.generation, 1);
    }

    #[test]
    fn blank_messages_are_noops() {
        for text in ["", "   "] {
            let before = ready();
            let (after, effect) = before.clone().apply(SessionEvent::SendMessage(text.into()));
            assert_eq!(after, before);
            assert!(effect.is_none());
        }
    }

    #[test]
    fn messages_before_a_report_are_noops() {
        let before = SessionState::default();
        let (after, effect) = before.clone().apply(SessionEvent::SendMessage("hi".into()));
        assert_eq!(after, before);
        assert!(effect.is_none());
    }

    #[test]
    fn send_appends_user_message_and_requests_reply() {
        let (s, effect) = ready().apply(SessionEvent::SendMessage("Which debt first?".into()));
        assert_eq!(s.phase, Phase::Replying);
        assert_eq!(s.transcript.len(), 2);
        assert_eq!(s.transcript[1], ChatMessage::user("Which debt first?"));
        match effect {
            Some(Effect::RequestReply {
                generation,
                history,
                message,
                ..
            }) => {
                assert_eq!(generation, 1);
                assert_eq!(history.len(), 1);
                assert_eq!(message, "Which debt first?");
            }
            other => panic!("unexpected effect {:?}", other),
        }

        let (s, _) = s.apply(SessionEvent::ReplyReady {
            generation: 1,
            text: "The card.".into(),
        });
        assert_eq!(s.phase, Phase::Ready);
        assert_eq!(s.transcript.last(), Some(&ChatMessage::assistant("The card.")));
    }

    #[test]
    fn only_one_reply_in_flight() {
        let (s, _) = ready().apply(SessionEvent::SendMessage("one".into()));
        let (s, effect) = s.apply(SessionEvent::SendMessage("two".into()));
        assert!(effect.is_none());
        assert_eq!(s.transcript.len(), 2);
    }

    #[test]
    fn reply_failure_appends_single_apology() {
        let (s, _) = ready().apply(SessionEvent::SendMessage("help".into()));
        let (s, _) = s.apply(SessionEvent::ReplyFailed { generation: 1 });
        assert_eq!(s.phase, Phase::Ready);
        assert_eq!(s.transcript.len(), 3);
        assert_eq!(s.transcript[2], ChatMessage::assistant(ADVISOR_APOLOGY));

        // a duplicate completion must not add a second assistant message
        let (s, _) = s.apply(SessionEvent::ReplyFailed { generation: 1 });
        assert_eq!(s.transcript.len(), 3);
    }

    #[test]
    fn stale_reply_after_resubmit_is_dropped() {
        let (s, _) = ready().apply(SessionEvent::SendMessage("help".into()));
        let (s, _) = s.apply(SessionEvent::Submit(sample_input()));
        let (s, _) = s.apply(SessionEvent::ReplyReady {
            generation: 1,
            text: "late".into(),
        });
        assert_eq!(s.phase, Phase::Generating);
        assert!(s.transcript.is_empty());

        let (s, _) = s.apply(SessionEvent::ReportReady {
            generation: 2,
            report: report(),
        });
        assert_eq!(s.transcript.len(), 1);
        assert_eq!(s.transcript[0].content, report().advisor_mode);
    }

    #[test]
    fn stale_report_is_dropped() {
        let (s, _) = SessionState::default().apply(SessionEvent::Submit(sample_input()));
        let (s, _) = s.apply(SessionEvent::ReportFailed {
            generation: 1,
            message: "x".into(),
        });
        let (s, _) = s.apply(SessionEvent::Submit(sample_input()));
        let (s, _) = s.apply(SessionEvent::ReportReady {
            generation: 1,
            report: report(),
        });
        assert_eq!(s.phase, Phase::Generating);
        assert!(s.report.is_none());
    }

    #[test]
    fn submission_ends_in_exactly_one_outcome() {
        for ok in [true, false] {
            let (s, _) = SessionState::default().apply(SessionEvent::Submit(sample_input()));
            let event = if ok {
                SessionEvent::ReportReady {
                    generation: 1,
                    report: report(),
                }
            } else {
                SessionEvent::ReportFailed {
                    generation: 1,
                    message: "x".into(),
                }
            };
            let (s, _) = s.apply(event);
            assert!(s.report.is_some() != s.error.is_some());
        }
    }
}
