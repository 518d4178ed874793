use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::config::load_config;
use crate::gemini::{GeminiClient, GenerationBackend};
use crate::service;
use crate::session::{Effect, SessionEvent, SessionState};

/// Owns the session state for the component tree and runs the requests the
/// state machine asks for.
#[derive(Clone)]
pub struct SessionHandle {
    state: Rc<RefCell<SessionState>>,
    backend: Rc<dyn GenerationBackend>,
    redraw: UseForceUpdateHandle,
}

impl PartialEq for SessionHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.state, &other.state)
    }
}

impl SessionHandle {
    pub fn snapshot(&self) -> SessionState {
        self.state.borrow().clone()
    }

    pub fn dispatch(&self, event: SessionEvent) {
        let current = self.state.take();
        let (next, effect) = current.apply(event);
        *self.state.borrow_mut() = next;
        self.redraw.force_update();

        if let Some(effect) = effect {
            self.run(effect);
        }
    }

    fn run(&self, effect: Effect) {
        let handle = self.clone();
        spawn_local(async move {
            let backend = handle.backend.as_ref();
            let event = match effect {
                Effect::RequestReport { generation, input } => {
                    match service::generate_report(backend, &input).await {
                        Ok(report) => SessionEvent::ReportReady { generation, report },
                        Err(err) => {
                            tracing::error!(error = %err, "report request failed");
                            SessionEvent::ReportFailed {
                                generation,
                                message: service::report_error_message(&err).to_string(),
                            }
                        }
                    }
                }
                Effect::RequestReply {
                    generation,
                    input,
                    report,
                    history,
                    message,
                } => {
                    match service::advisor_reply(backend, &input, &report, &history, &message)
                        .await
                    {
                        Ok(text) => SessionEvent::ReplyReady { generation, text },
                        Err(err) => {
                            tracing::error!(error = %err, "advisor request failed");
                            SessionEvent::ReplyFailed { generation }
                        }
                    }
                }
            };
            handle.dispatch(event);
        });
    }
}

#[hook]
pub fn use_session() -> SessionHandle {
    let state = use_mut_ref(SessionState::default);
    let backend = use_state(|| Rc::new(GeminiClient::new(load_config())) as Rc<dyn GenerationBackend>);
    let redraw = use_force_update();

    SessionHandle {
        state,
        backend: (*backend).clone(),
        redraw,
    }
}
