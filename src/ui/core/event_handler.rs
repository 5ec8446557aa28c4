use crossterm::event::{poll, Event, KeyEvent, KeyEventKind, MouseEvent};
use tokio::time::{Duration, Instant};

/// Tick period; drives settle animations
const TICK_RATE: Duration = Duration::from_millis(33);
/// Minimum time between two frames (~60 FPS)
const FRAME_TIME: Duration = Duration::from_millis(16);

pub struct EventHandler {
    tick_rate: Duration,
    last_render_time: Instant,
}

impl EventHandler {
    pub fn new() -> Self {
        Self::with_tick_rate(TICK_RATE)
    }

    pub fn with_tick_rate(tick_rate: Duration) -> Self {
        Self {
            tick_rate,
            last_render_time: Instant::now(),
        }
    }

    pub fn tick_rate(&self) -> Duration {
        self.tick_rate
    }

    pub async fn next_event(&mut self) -> anyhow::Result<EventType> {
        // Check for terminal events without blocking first
        if poll(Duration::from_millis(0))? {
            return Ok(Self::classify(crossterm::event::read()?));
        }

        // If no immediate event, wait a bit and return tick
        tokio::time::sleep(self.tick_rate).await;
        Ok(EventType::Tick)
    }

    /// Map a raw terminal event onto the events the app reacts to
    pub fn classify(event: Event) -> EventType {
        match event {
            // Windows reports both press and release
            Event::Key(key) if key.kind == KeyEventKind::Press => EventType::Key(key),
            Event::Mouse(mouse) => EventType::Mouse(mouse),
            Event::Resize(w, h) => EventType::Resize(w, h),
            _ => EventType::Other,
        }
    }

    /// Get the time since last render for frame timing
    pub fn time_since_last_render(&self) -> Duration {
        self.last_render_time.elapsed()
    }

    /// Check if we should render based on timing
    pub fn should_render(&self) -> bool {
        self.time_since_last_render() >= FRAME_TIME
    }

    pub fn mark_rendered(&mut self) {
        self.last_render_time = Instant::now();
    }
}

#[derive(Debug, Clone)]
pub enum EventType {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize(u16, u16),
    Tick,
    Other,
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}
