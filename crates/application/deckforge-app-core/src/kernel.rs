use std::future::Future;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::app_core::{AppCommand, AppStore, DomainEvent};
use crate::domain::{is_blank, WorkflowState};
use crate::messages;
use crate::ports::DeckServicePort;

/// Runs workflow commands: state changes go through the store's reducer, and
/// requests run on the shared runtime and report back as domain events.
pub struct AppKernel<S> {
    pub store: AppStore,
    service: Arc<S>,

    tx: mpsc::Sender<DomainEvent>,
    rx: mpsc::Receiver<DomainEvent>,
}

impl<S> AppKernel<S>
where
    S: DeckServicePort,
{
    pub fn new(store: AppStore, service: S) -> Self {
        let (tx, rx) = mpsc::channel(deckforge_config::EVENT_CHANNEL_CAPACITY);
        Self {
            store,
            service: Arc::new(service),
            tx,
            rx,
        }
    }

    pub fn state(&self) -> WorkflowState {
        self.store.state()
    }

    pub fn dispatch(&mut self, cmd: AppCommand) {
        match cmd {
            AppCommand::SelectFormat(format) => {
                debug!("format selected: {format}");
                self.store.apply(DomainEvent::FormatSelected(format));
            }

            AppCommand::EditCardList(text) => self.store.apply(DomainEvent::CardListEdited(text)),

            AppCommand::LoadCardFile(path) => {
                if !path
                    .file_name()
                    .is_some_and(deckforge_config::is_card_list_file)
                {
                    warn!("refusing card list {path}: not a .txt file");
                    self.store
                        .apply(DomainEvent::UserError(messages::UNSUPPORTED_CARD_FILE.into()));
                    return;
                }
                let seq = self.store.with_state(|s| s.requests.card_file.next_seq());
                self.store.apply(DomainEvent::CardFileLoadStarted { seq });
                debug!("reading card list from {path}");
                self.spawn_request(
                    "card-file",
                    async move {
                        match deckforge_infra::read_card_file(&path).await {
                            Ok(text) => DomainEvent::CardFileLoaded { seq, text },
                            Err(e) => {
                                warn!("{e}");
                                DomainEvent::CardFileFailed { seq }
                            }
                        }
                    },
                    move |_| DomainEvent::CardFileFailed { seq },
                );
            }

            AppCommand::EditDeckGoal(goal) => self.store.apply(DomainEvent::DeckGoalEdited(goal)),

            AppCommand::EnterCommander(name) => {
                let seq = self.store.with_state(|s| s.requests.commander.next_seq());
                self.store.apply(DomainEvent::CommanderEntered {
                    name: name.clone(),
                    seq,
                });
                if is_blank(&name) {
                    return;
                }

                let service = self.service.clone();
                let name = name.trim().to_string();
                debug!("validating commander {name:?} (#{seq})");
                self.spawn_request(
                    "validate-commander",
                    async move {
                        match service.validate_commander(&name, false).await {
                            Ok(info) => DomainEvent::CommanderValidated { seq, info },
                            Err(e) => {
                                warn!("commander {name:?} rejected: {e}");
                                DomainEvent::CommanderRejected {
                                    seq,
                                    detail: e.to_string(),
                                }
                            }
                        }
                    },
                    move |detail| DomainEvent::CommanderRejected { seq, detail },
                );
            }

            AppCommand::EnterPartner(name) => {
                let (seq, commander) = self.store.with_state(|s| {
                    (
                        s.requests.partner.next_seq(),
                        s.commander.value().to_string(),
                    )
                });

                if !is_blank(&name) && commander.is_empty() {
                    self.store.apply(DomainEvent::PartnerEntered {
                        name: String::new(),
                        seq,
                    });
                    self.store
                        .apply(DomainEvent::UserError(messages::MISSING_COMMANDER.into()));
                    return;
                }

                self.store.apply(DomainEvent::PartnerEntered {
                    name: name.clone(),
                    seq,
                });
                if is_blank(&name) {
                    return;
                }

                let service = self.service.clone();
                let partner = name.trim().to_string();
                debug!("validating partner {partner:?} for {commander:?} (#{seq})");
                self.spawn_request(
                    "check-partner",
                    async move {
                        if let Err(e) = service.validate_commander(&partner, true).await {
                            warn!("partner {partner:?} rejected: {e}");
                            return DomainEvent::PartnerRejected {
                                seq,
                                detail: e.to_string(),
                            };
                        }
                        match service.check_partner(&commander, &partner).await {
                            Ok(c) if c.is_compatible => DomainEvent::PartnerAccepted { seq },
                            Ok(c) => DomainEvent::PartnerIncompatible {
                                seq,
                                reason: c.reason,
                            },
                            Err(e) => {
                                warn!("partner check for {partner:?} failed: {e}");
                                DomainEvent::PartnerRejected {
                                    seq,
                                    detail: e.to_string(),
                                }
                            }
                        }
                    },
                    move |detail| DomainEvent::PartnerRejected { seq, detail },
                );
            }

            AppCommand::SubmitBuild => {
                let (request, seq) = self
                    .store
                    .with_state(|s| (s.build_request(), s.requests.build.next_seq()));
                let request = match request {
                    Ok(r) => r,
                    Err(message) => {
                        self.store.apply(DomainEvent::UserError(message.into()));
                        return;
                    }
                };

                self.store.apply(DomainEvent::BuildStarted { seq });
                info!(
                    "building {} deck (commander: {:?}, partner: {:?})",
                    request.format, request.commander, request.partner_commander
                );

                let service = self.service.clone();
                self.spawn_request(
                    "build-deck",
                    async move {
                        match service.build_deck(&request).await {
                            Ok(deck) => {
                                info!("deck built with {} cards", deck.cards.len());
                                DomainEvent::DeckBuilt { seq, deck }
                            }
                            Err(e) => {
                                warn!("deck build failed: {e}");
                                DomainEvent::BuildFailed {
                                    seq,
                                    detail: e.to_string(),
                                }
                            }
                        }
                    },
                    move |detail| DomainEvent::BuildFailed { seq, detail },
                );
            }

            AppCommand::EditAgain => self.store.apply(DomainEvent::EditAgain),
            AppCommand::StartOver => self.store.apply(DomainEvent::StartedOver),
            AppCommand::DismissError => self.store.apply(DomainEvent::ErrorDismissed),
        }
    }

    /// Applies every completion that has arrived. Never blocks.
    /// Returns how many events were applied.
    pub fn tick(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(ev) = self.rx.try_recv() {
            self.store.apply(ev);
            applied += 1;
        }
        applied
    }

    /// Waits until no request is in flight, applying completions as they arrive.
    pub async fn settle(&mut self) {
        self.tick();
        while self.store.with_state(WorkflowState::is_loading) {
            match self.rx.recv().await {
                Some(ev) => self.store.apply(ev),
                None => break,
            }
        }
    }

    fn spawn_request<F>(
        &self,
        label: &'static str,
        request: F,
        on_spawn_error: impl FnOnce(String) -> DomainEvent,
    ) where
        F: Future<Output = DomainEvent> + Send + 'static,
    {
        match crate::async_runtime::runtime() {
            Ok(rt) => {
                let tx = self.tx.clone();
                rt.spawn(async move {
                    let ev = request.await;
                    if tx.send(ev).await.is_err() {
                        debug!("{label} finished after the kernel was dropped");
                    }
                });
            }
            Err(e) => {
                warn!("failed to start {label}: {e}");
                self.store
                    .apply(on_spawn_error(format!("Failed to start request: {e}")));
            }
        }
    }
}
