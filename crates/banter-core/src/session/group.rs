//! Group session coordinator.
//!
//! A `GroupSession` owns the persona assignment for a set of accounts and
//! turns inbound group messages into sent replies: it filters and dedups
//! events, serializes work per account, simulates typing, runs the
//! response engine, sends through the transport, and records the exchange
//! in the conversation history and the chat log.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};
use std::time::Duration;

use dashmap::DashMap;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use banter_types::account::{AccountId, PersonaAssignment};
use banter_types::chat::{InboundMessage, Reply, StarterMessage};
use banter_types::config::SessionConfig;
use banter_types::error::SessionError;

use crate::engine::ResponseEngine;
use crate::history::{DedupWindow, HistoryTracker};
use crate::persona::assigner::{self, MIN_ACCOUNTS};
use crate::persona::starter::{self, GroupDynamic};
use crate::persona::{catalog, persona_for};
use crate::random::{self, SharedRandomness};

use super::ports::{ChatLog, ChatTransport};

/// Replies this short (after trimming) are generated but never sent.
const MIN_SENT_CHARS: usize = 3;

/// Coordinates a group of persona-driven accounts in one channel.
pub struct GroupSession<T, L> {
    engine: ResponseEngine,
    transport: T,
    log: L,
    config: SessionConfig,
    rng: SharedRandomness,
    assignment: RwLock<Arc<PersonaAssignment>>,
    dedup: DedupWindow,
    lanes: DashMap<AccountId, Arc<Mutex<()>>>,
    running: AtomicBool,
}

impl<T: ChatTransport, L: ChatLog> GroupSession<T, L> {
    /// Create a running session with no assignment yet.
    pub fn new(
        engine: ResponseEngine,
        transport: T,
        log: L,
        config: SessionConfig,
        rng: SharedRandomness,
    ) -> Self {
        Self {
            engine,
            transport,
            log,
            config,
            rng,
            assignment: RwLock::new(Arc::new(PersonaAssignment::default())),
            dedup: DedupWindow::new(),
            lanes: DashMap::new(),
            running: AtomicBool::new(true),
        }
    }

    /// Rebuild the persona assignment for `accounts`.
    pub fn assign_personas(
        &self,
        accounts: &[AccountId],
    ) -> Result<Arc<PersonaAssignment>, SessionError> {
        if accounts.len() < MIN_ACCOUNTS {
            return Err(SessionError::NotEnoughAccounts(accounts.len()));
        }

        let assignment = {
            let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
            Arc::new(assigner::assign(accounts, rng.as_mut()))
        };

        for slot in assignment.slots() {
            info!(
                account = %slot.account,
                persona = catalog::profile(slot.archetype).name,
                "Persona assigned"
            );
        }
        for dynamic in starter::group_dynamics(&assignment) {
            debug!(dynamic = dynamic.describe(), "Group dynamic active");
        }

        *self.assignment.write().unwrap_or_else(|e| e.into_inner()) = assignment.clone();
        Ok(assignment)
    }

    /// Current assignment snapshot.
    pub fn assignment(&self) -> Arc<PersonaAssignment> {
        self.assignment
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    pub fn dynamics(&self) -> Vec<GroupDynamic> {
        starter::group_dynamics(&self.assignment())
    }

    pub fn history(&self) -> &Arc<HistoryTracker> {
        self.engine.history()
    }

    pub fn engine(&self) -> &ResponseEngine {
        &self.engine
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    /// Stop reacting to inbound events.
    pub fn stop(&self) {
        if self.running.swap(false, Ordering::SeqCst) {
            info!("Group session stopped");
        }
    }

    /// React to one inbound group message on behalf of `account`.
    ///
    /// Returns `Ok(None)` when the event is filtered out (session stopped,
    /// own message, too short, already handled) or the reply was too short
    /// to send. Transport and log failures are returned to the caller.
    pub async fn handle_inbound(
        &self,
        account: &AccountId,
        event: &InboundMessage,
    ) -> Result<Option<Reply>, SessionError> {
        if !self.is_running() {
            return Ok(None);
        }
        if event.sender_account.as_ref() == Some(account) {
            return Ok(None);
        }
        if event.text.trim().chars().count() < self.config.min_inbound_chars {
            return Ok(None);
        }
        if !self.dedup.check_and_mark(account, event.message_id) {
            debug!(account = %account, message_id = event.message_id, "Duplicate event skipped");
            return Ok(None);
        }

        let lane = self.lanes.entry(account.clone()).or_default().clone();
        let _turn = lane.lock().await;

        let assignment = self.assignment();
        let persona = persona_for(&assignment, account);
        debug!(
            account = %account,
            persona = persona.name,
            message_id = event.message_id,
            text = %event.text,
            "Inbound message received"
        );

        let delay = self.typing_delay();
        debug!(account = %account, delay_ms = delay.as_millis() as u64, "Typing");
        tokio::time::sleep(delay).await;

        let reply = self.engine.respond(account, &assignment, &event.text).await;
        if reply.text.trim().len() < MIN_SENT_CHARS {
            warn!(account = %account, reply = %reply.text, "Reply too short, not sent");
            return Ok(None);
        }

        self.transport
            .send_message(&self.config.channel_id, account, &reply.text)
            .await?;

        let history = self.engine.history();
        history.record_turn(format!("User_{}", event.sender_id), event.text.as_str());
        history.record_turn(account.to_string(), reply.text.as_str());

        self.log
            .log_message(account, &reply.text, persona.name)
            .await?;

        info!(
            account = %account,
            persona = persona.name,
            reply = %reply.text,
            fallback = reply.is_fallback(),
            "Reply sent"
        );
        Ok(Some(reply))
    }

    /// Open the conversation with a persona-appropriate starter line.
    pub async fn start_conversation(&self) -> Result<StarterMessage, SessionError> {
        if !self.is_running() {
            return Err(SessionError::NotRunning);
        }

        let assignment = self.assignment();
        let (account, archetype, text) = {
            let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
            let Some((account, archetype)) = starter::pick_starter(&assignment, rng.as_mut())
            else {
                return Err(SessionError::NotEnoughAccounts(assignment.len()));
            };
            let text = random::choose(rng.as_mut(), starter::starters(archetype))
                .copied()
                .unwrap_or("hey everyone");
            (account, archetype, text)
        };

        self.transport
            .send_message(&self.config.channel_id, &account, text)
            .await?;

        let persona = catalog::profile(archetype);
        self.engine.history().record_turn(account.to_string(), text);
        self.log.log_message(&account, text, persona.name).await?;

        info!(account = %account, persona = persona.name, text, "Conversation started");
        Ok(StarterMessage {
            account,
            archetype,
            text: text.to_string(),
        })
    }

    fn typing_delay(&self) -> Duration {
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        Duration::from_millis(rng.between(
            self.config.typing_delay_min_ms,
            self.config.typing_delay_max_ms,
        ))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex as StdMutex;
    use std::sync::atomic::AtomicI64;
    use std::time::Instant;

    use banter_types::config::GenerationConfig;
    use banter_types::error::{LogError, TransportError};
    use banter_types::persona::ArchetypeId;

    use super::*;
    use crate::llm::BoxTextGenerator;
    use crate::llm::testing::{ScriptedGenerator, Step};
    use crate::random::shared;
    use crate::random::testing::Scripted;

    #[derive(Default)]
    struct MockTransport {
        sent: StdMutex<Vec<(String, AccountId, String)>>,
        next_id: AtomicI64,
        fail: bool,
    }

    impl ChatTransport for MockTransport {
        fn send_message(
            &self,
            channel: &str,
            account: &AccountId,
            text: &str,
        ) -> impl std::future::Future<Output = Result<i64, TransportError>> + Send {
            let result = if self.fail {
                Err(TransportError::SendFailed("network down".to_string()))
            } else {
                self.sent
                    .lock()
                    .unwrap()
                    .push((channel.to_string(), account.clone(), text.to_string()));
                Ok(self.next_id.fetch_add(1, Ordering::SeqCst))
            };
            async move { result }
        }
    }

    #[derive(Default)]
    struct MockLog {
        entries: StdMutex<Vec<(AccountId, String, String)>>,
    }

    impl ChatLog for MockLog {
        fn log_message(
            &self,
            account: &AccountId,
            text: &str,
            persona: &str,
        ) -> impl std::future::Future<Output = Result<(), LogError>> + Send {
            self.entries
                .lock()
                .unwrap()
                .push((account.clone(), text.to_string(), persona.to_string()));
            async { Ok(()) }
        }
    }

    type TestSession = GroupSession<Arc<MockTransport>, Arc<MockLog>>;

    struct Harness {
        session: TestSession,
        transport: Arc<MockTransport>,
        log: Arc<MockLog>,
    }

    fn config(delay_ms: u64) -> SessionConfig {
        SessionConfig {
            typing_delay_min_ms: delay_ms,
            typing_delay_max_ms: delay_ms,
            ..SessionConfig::default()
        }
    }

    fn harness_with(
        steps: Vec<Step>,
        transport: MockTransport,
        session_config: SessionConfig,
    ) -> Harness {
        let rng = shared(Scripted::new());
        let engine = ResponseEngine::new(
            BoxTextGenerator::new(ScriptedGenerator::new(steps)),
            GenerationConfig::default(),
            Arc::new(HistoryTracker::new()),
            rng.clone(),
        );
        let transport = Arc::new(transport);
        let log = Arc::new(MockLog::default());
        let session = GroupSession::new(
            engine,
            transport.clone(),
            log.clone(),
            session_config,
            rng,
        );
        Harness {
            session,
            transport,
            log,
        }
    }

    fn harness(steps: Vec<Step>) -> Harness {
        harness_with(steps, MockTransport::default(), config(0))
    }

    fn accounts(names: &[&str]) -> Vec<AccountId> {
        names.iter().map(|n| AccountId::new(*n)).collect()
    }

    fn inbound(message_id: i64, text: &str) -> InboundMessage {
        InboundMessage {
            message_id,
            sender_id: 42,
            sender_account: None,
            text: text.to_string(),
        }
    }

    #[test]
    fn assign_requires_two_accounts() {
        let h = harness(vec![]);
        let err = h.session.assign_personas(&accounts(&["solo"])).unwrap_err();
        assert!(matches!(err, SessionError::NotEnoughAccounts(1)));
        assert!(h.session.assignment().is_empty());

        let assignment = h
            .session
            .assign_personas(&accounts(&["boy", "girl"]))
            .unwrap();
        assert_eq!(
            assignment.archetype_for(&AccountId::new("girl")),
            Some(ArchetypeId::Girl)
        );
        assert_eq!(h.session.dynamics(), vec![GroupDynamic::Couple]);
    }

    #[tokio::test]
    async fn reply_is_sent_recorded_and_logged() {
        let h = harness(vec![Step::Reply("haha thanks bro")]);
        h.session
            .assign_personas(&accounts(&["boy", "girl"]))
            .unwrap();
        let girl = AccountId::new("girl");

        let reply = h
            .session
            .handle_inbound(&girl, &inbound(1, "hey beautiful"))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(reply.text, "haha thanks bro");
        let sent = h.transport.sent.lock().unwrap().clone();
        assert_eq!(
            sent,
            vec![("group".to_string(), girl.clone(), "haha thanks bro".to_string())]
        );

        let turns = h.session.history().turns();
        assert_eq!(turns.len(), 2);
        assert_eq!(turns[0].speaker, "User_42");
        assert_eq!(turns[0].text, "hey beautiful");
        assert_eq!(turns[1].speaker, "girl");

        let entries = h.log.entries.lock().unwrap().clone();
        assert_eq!(
            entries,
            vec![(girl, "haha thanks bro".to_string(), "Girl".to_string())]
        );
    }

    #[tokio::test]
    async fn filtered_events_produce_nothing() {
        let h = harness(vec![Step::Reply("sup whats good")]);
        h.session
            .assign_personas(&accounts(&["boy", "girl"]))
            .unwrap();
        let boy = AccountId::new("boy");

        let mut own = inbound(1, "my own message");
        own.sender_account = Some(boy.clone());
        assert!(h.session.handle_inbound(&boy, &own).await.unwrap().is_none());

        assert!(
            h.session
                .handle_inbound(&boy, &inbound(2, " k "))
                .await
                .unwrap()
                .is_none()
        );

        assert!(
            h.session
                .handle_inbound(&boy, &inbound(3, "yo guys"))
                .await
                .unwrap()
                .is_some()
        );
        assert!(
            h.session
                .handle_inbound(&boy, &inbound(3, "yo guys"))
                .await
                .unwrap()
                .is_none()
        );
        assert_eq!(h.transport.sent.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn stopped_session_ignores_events() {
        let h = harness(vec![Step::Reply("sup whats good")]);
        h.session
            .assign_personas(&accounts(&["boy", "girl"]))
            .unwrap();
        h.session.stop();
        assert!(!h.session.is_running());

        let result = h
            .session
            .handle_inbound(&AccountId::new("boy"), &inbound(1, "yo guys"))
            .await
            .unwrap();
        assert!(result.is_none());
        assert!(matches!(
            h.session.start_conversation().await,
            Err(SessionError::NotRunning)
        ));
    }

    #[tokio::test]
    async fn transport_failure_is_surfaced() {
        let failing = MockTransport {
            fail: true,
            ..MockTransport::default()
        };
        let h = harness_with(vec![Step::Reply("sup whats good")], failing, config(0));
        h.session
            .assign_personas(&accounts(&["boy", "girl"]))
            .unwrap();

        let err = h
            .session
            .handle_inbound(&AccountId::new("boy"), &inbound(1, "yo guys"))
            .await
            .unwrap_err();
        assert!(matches!(err, SessionError::Transport(_)));
        assert!(h.session.history().turns().is_empty());
        assert!(h.log.entries.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn starter_follows_priority() {
        let h = harness(vec![]);
        h.session
            .assign_personas(&accounts(&["a", "b", "c", "d"]))
            .unwrap();

        let starter = h.session.start_conversation().await.unwrap();
        assert_eq!(starter.account.as_str(), "a");
        assert_eq!(starter.archetype, ArchetypeId::FlirtyBoy);
        assert_eq!(starter.text, "hey beautiful whats up");

        let turns = h.session.history().turns();
        assert_eq!(turns.len(), 1);
        assert_eq!(turns[0].speaker, "a");
        let entries = h.log.entries.lock().unwrap().clone();
        assert_eq!(entries[0].2, "Flirty Boy");
    }

    #[tokio::test]
    async fn starter_without_assignment_fails() {
        let h = harness(vec![]);
        assert!(matches!(
            h.session.start_conversation().await,
            Err(SessionError::NotEnoughAccounts(0))
        ));
    }

    #[tokio::test]
    async fn same_account_messages_are_serialized() {
        let h = harness_with(
            vec![Step::Reply("sup whats good"), Step::Reply("lol okay then")],
            MockTransport::default(),
            config(40),
        );
        h.session
            .assign_personas(&accounts(&["boy", "girl"]))
            .unwrap();
        let boy = AccountId::new("boy");

        let started = Instant::now();
        let first = inbound(1, "yo guys");
        let second = inbound(2, "anyone here");
        let (a, b) = tokio::join!(
            h.session.handle_inbound(&boy, &first),
            h.session.handle_inbound(&boy, &second),
        );
        assert!(a.unwrap().is_some());
        assert!(b.unwrap().is_some());
        assert!(started.elapsed() >= Duration::from_millis(80));
        assert_eq!(h.transport.sent.lock().unwrap().len(), 2);
    }
}
