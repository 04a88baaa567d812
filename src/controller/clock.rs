//! Clock controller methods (time picker, display mode)

use chrono::NaiveTime;

use crate::model::format_time;
use super::AppController;

impl AppController {
    pub async fn open_time_picker(&self) {
        let model = self.model.lock().await;
        model.open_time_picker().await;
        tracing::debug!("Time picker opened");
    }

    /// Apply the picker draft ("Done") and notify the time-change hook.
    pub async fn commit_time_picker(&self) -> Option<NaiveTime> {
        let model = self.model.lock().await;
        let time = model.commit_time_picker().await?;
        drop(model);
        Self::on_time_change(time);
        Some(time)
    }

    pub async fn toggle_hour_format(&self) {
        let model = self.model.lock().await;
        let format = model.toggle_hour_format().await;
        tracing::debug!(format = format.label(), "Hour format toggled");
    }

    // Alarm scheduling hooks in here once it exists; for now the change is only logged.
    fn on_time_change(time: NaiveTime) {
        tracing::info!("Alarm set for {}", format_time(time, true));
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use tokio::sync::Mutex;

    use super::*;
    use crate::model::{AppModel, HourFormat, StubSongResolver};

    fn controller() -> AppController {
        let model = AppModel::new(NaiveTime::from_hms_opt(23, 30, 0).unwrap(), HourFormat::TwelveHour);
        AppController::new(Arc::new(Mutex::new(model)), Arc::new(StubSongResolver))
    }

    #[tokio::test]
    async fn commit_without_open_picker_is_noop() {
        let controller = controller();
        assert_eq!(controller.commit_time_picker().await, None);
    }

    #[tokio::test]
    async fn picker_round_trip_through_controller() {
        let controller = controller();
        controller.open_time_picker().await;
        controller.model.lock().await.picker_increment().await;

        let committed = controller.commit_time_picker().await;
        assert_eq!(committed, NaiveTime::from_hms_opt(0, 30, 0));

        controller.toggle_hour_format().await;
        let clock = controller.model.lock().await.get_clock_state().await;
        assert_eq!(clock.displayed_time(), "00:30");
    }
}
