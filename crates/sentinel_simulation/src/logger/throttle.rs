//! Rate-limited per-tick status channel.

/// Интервал (секунды симуляции) между повторами одного и того же сообщения
pub const DEFAULT_LOG_INTERVAL: f32 = 1.0;

/// Throttle для per-tick статусов агента ("Enemy is patrolling...")
///
/// Сообщение пропускается если:
/// - текст отличается от последнего выведенного, ИЛИ
/// - с последнего вывода прошло ≥ interval
///
/// Каждый агент владеет своим throttle — нет глобального состояния,
/// два агента не глушат друг друга.
#[derive(Debug, Clone)]
pub struct ThrottledLog {
    interval: f32,
    last_message: Option<String>,
    last_time: f32,
}

impl Default for ThrottledLog {
    fn default() -> Self {
        Self::new(DEFAULT_LOG_INTERVAL)
    }
}

impl ThrottledLog {
    pub fn new(interval: f32) -> Self {
        Self {
            interval,
            last_message: None,
            last_time: 0.0,
        }
    }

    /// Проверяет пропустит ли throttle сообщение в момент `now` (без side effects)
    pub fn should_emit(&self, now: f32, message: &str) -> bool {
        match &self.last_message {
            None => true,
            Some(last) => last != message || now - self.last_time >= self.interval,
        }
    }

    /// Отправляет сообщение в debug канал если throttle разрешает.
    ///
    /// Возвращает `true` если сообщение было выведено.
    pub fn log(&mut self, now: f32, message: &str) -> bool {
        if !self.should_emit(now, message) {
            return false;
        }

        crate::logger::log(message);
        self.last_time = now;
        match &mut self.last_message {
            Some(last) => {
                last.clear();
                last.push_str(message);
            }
            None => self.last_message = Some(message.to_owned()),
        }
        true
    }

    pub fn last_message(&self) -> Option<&str> {
        self.last_message.as_deref()
    }
}
