//! In-memory quiz sessions.
//!
//! Sessions idle for longer than the TTL are dropped whenever a new quiz is
//! stored. When the store is full the least recently used session goes.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::quiz::TeacherQuiz;

/// How long a session may sit untouched before it is evicted.
pub const SESSION_IDLE_TTL: Duration = Duration::from_secs(2 * 60 * 60);
/// Most sessions held at once.
pub const MAX_SESSIONS: usize = 1_000;

#[derive(Debug)]
struct Entry {
    quiz: TeacherQuiz,
    touched_at: Instant,
    /// Bumped on every access; orders entries for capacity eviction.
    stamp: u64,
}

#[derive(Debug, Default)]
struct Sessions {
    entries: HashMap<Uuid, Entry>,
    clock: u64,
}

impl Sessions {
    fn tick(&mut self) -> u64 {
        self.clock += 1;
        self.clock
    }

    fn touch(&mut self, id: &Uuid) -> Option<&mut Entry> {
        let stamp = self.tick();
        let entry = self.entries.get_mut(id)?;
        entry.touched_at = Instant::now();
        entry.stamp = stamp;
        Some(entry)
    }
}

/// Shared map of running quizzes.
#[derive(Debug, Clone)]
pub struct QuizSessionStore {
    sessions: Arc<RwLock<Sessions>>,
    idle_ttl: Duration,
    capacity: usize,
}

impl Default for QuizSessionStore {
    fn default() -> Self {
        Self::with_limits(SESSION_IDLE_TTL, MAX_SESSIONS)
    }
}

impl QuizSessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store with its own idle timeout and size cap. A capacity of zero
    /// is treated as one.
    pub fn with_limits(idle_ttl: Duration, capacity: usize) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(Sessions::default())),
            idle_ttl,
            capacity: capacity.max(1),
        }
    }

    /// Stores a quiz under a fresh id, evicting stale sessions first.
    pub async fn insert(&self, quiz: TeacherQuiz) -> Uuid {
        let mut sessions = self.sessions.write().await;

        let idle_ttl = self.idle_ttl;
        let before = sessions.entries.len();
        sessions
            .entries
            .retain(|_, entry| entry.touched_at.elapsed() < idle_ttl);
        let mut evicted = before - sessions.entries.len();

        while sessions.entries.len() >= self.capacity {
            let oldest = sessions
                .entries
                .iter()
                .min_by_key(|(_, entry)| entry.stamp)
                .map(|(id, _)| *id);
            match oldest {
                Some(id) => {
                    sessions.entries.remove(&id);
                    evicted += 1;
                }
                None => break,
            }
        }
        if evicted > 0 {
            tracing::debug!(evicted, remaining = sessions.entries.len(), "quiz sessions evicted");
        }

        let id = Uuid::new_v4();
        let stamp = sessions.tick();
        sessions.entries.insert(
            id,
            Entry {
                quiz,
                touched_at: Instant::now(),
                stamp,
            },
        );
        id
    }

    pub async fn get(&self, id: &Uuid) -> Option<TeacherQuiz> {
        self.sessions
            .write()
            .await
            .touch(id)
            .map(|entry| entry.quiz.clone())
    }

    /// Runs `f` on the stored quiz; `None` when the id is unknown.
    pub async fn update<R>(&self, id: &Uuid, f: impl FnOnce(&mut TeacherQuiz) -> R) -> Option<R> {
        self.sessions
            .write()
            .await
            .touch(id)
            .map(|entry| f(&mut entry.quiz))
    }

    pub async fn remove(&self, id: &Uuid) -> Option<TeacherQuiz> {
        self.sessions
            .write()
            .await
            .entries
            .remove(id)
            .map(|entry| entry.quiz)
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.entries.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
