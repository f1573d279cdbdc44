/// Handle returned when scheduling; used to cancel exactly that timer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TimerId(u32);

#[derive(Clone, Copy, Debug, PartialEq)]
enum Repeat {
    Once,
    Every(f64),
}

#[derive(Clone, Debug)]
struct Entry<E> {
    id: TimerId,
    due_ms: f64,
    repeat: Repeat,
    event: E,
}

/// A timer that came due.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Fired<E> {
    pub id: TimerId,
    pub due_ms: f64,
    pub event: E,
}

/// Cooperative timer queue driven by the frame loop.
///
/// The host calls [`Timers::pop_due`] with the current time until it returns
/// `None`. Each pop moves the queue's clock to the fired deadline, so a timer
/// scheduled in response is measured from when its trigger was due rather
/// than from when the frame happened to observe it.
#[derive(Clone, Debug)]
pub struct Timers<E> {
    now_ms: f64,
    next_id: u32,
    entries: Vec<Entry<E>>,
}

impl<E: Copy> Timers<E> {
    pub fn new(now_ms: f64) -> Self {
        Self {
            now_ms,
            next_id: 0,
            entries: Vec::new(),
        }
    }

    #[inline]
    pub fn now_ms(&self) -> f64 {
        self.now_ms
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_pending(&self, id: TimerId) -> bool {
        self.entries.iter().any(|e| e.id == id)
    }

    fn push(&mut self, delay_ms: f64, repeat: Repeat, event: E) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.entries.push(Entry {
            id,
            due_ms: self.now_ms + delay_ms.max(0.0),
            repeat,
            event,
        });
        id
    }

    pub fn schedule_once(&mut self, delay_ms: f64, event: E) -> TimerId {
        self.push(delay_ms, Repeat::Once, event)
    }

    /// Fires every `interval_ms` (minimum 1ms) until cancelled.
    pub fn schedule_repeating(&mut self, interval_ms: f64, event: E) -> TimerId {
        let interval = interval_ms.max(1.0);
        self.push(interval, Repeat::Every(interval), event)
    }

    /// Returns whether the timer was still pending.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        self.entries.len() != before
    }

    /// Drop every pending timer.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Pop the earliest timer due at or before `now_ms`; ties fire in
    /// insertion order. A repeating timer that fell several periods behind
    /// fires once and resumes on its grid.
    pub fn pop_due(&mut self, now_ms: f64) -> Option<Fired<E>> {
        let idx = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, e)| e.due_ms <= now_ms)
            .min_by(|(_, a), (_, b)| a.due_ms.total_cmp(&b.due_ms))
            .map(|(i, _)| i);
        let Some(idx) = idx else {
            self.now_ms = self.now_ms.max(now_ms);
            return None;
        };
        let entry = &self.entries[idx];
        let fired = Fired {
            id: entry.id,
            due_ms: entry.due_ms,
            event: entry.event,
        };
        let repeat = entry.repeat;
        self.now_ms = self.now_ms.max(fired.due_ms);
        match repeat {
            Repeat::Once => {
                self.entries.remove(idx);
            }
            Repeat::Every(interval) => {
                let mut next = fired.due_ms + interval;
                while next <= now_ms {
                    next += interval;
                }
                self.entries[idx].due_ms = next;
            }
        }
        Some(fired)
    }
}
