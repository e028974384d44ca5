// src/cli/state.rs
use chrono::{DateTime, Local};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};

use crate::cli::input::Action;
use crate::cli::poller::PollEvent;
use crate::cli::util;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct Money(pub Decimal);

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DailyPoint {
    pub date: String,
    pub amount: Money,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MonthlyPoint {
    pub month: String,
    pub amount: Money,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CategorySlice {
    pub category: String,
    pub value: Money,
}

/// One chart series. The backend sends `{"datasets": [{"data": [...]}]}` and
/// only the first dataset is drawn; a bare array is accepted as well.
#[derive(Debug, Clone, PartialEq)]
pub struct Series<T>(pub Vec<T>);

impl<T> Default for Series<T> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<T> Series<T> {
    pub fn points(&self) -> &[T] {
        &self.0
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Series<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Dataset<P> {
            #[serde(default = "Vec::new")]
            data: Vec<P>,
        }

        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Wire<P> {
            Wrapped { datasets: Vec<Dataset<P>> },
            Bare(Vec<P>),
        }

        Ok(match Wire::deserialize(deserializer)? {
            Wire::Wrapped { datasets } => {
                Series(datasets.into_iter().next().map(|d| d.data).unwrap_or_default())
            }
            Wire::Bare(points) => Series(points),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpendingSnapshot {
    #[serde(default)]
    pub spending_over_time: Series<DailyPoint>,
    #[serde(default)]
    pub monthly_trend: Series<MonthlyPoint>,
    #[serde(default)]
    pub category_distribution: Series<CategorySlice>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState {
    Loading,
    Error(String),
    Ready,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Daily,
    Monthly,
    Category,
}

impl Focus {
    fn index(self) -> usize {
        match self {
            Focus::Daily => 0,
            Focus::Monthly => 1,
            Focus::Category => 2,
        }
    }
    fn next(self) -> Self {
        match self {
            Focus::Daily => Focus::Monthly,
            Focus::Monthly => Focus::Category,
            Focus::Category => Focus::Daily,
        }
    }
    fn prev(self) -> Self {
        match self {
            Focus::Daily => Focus::Category,
            Focus::Monthly => Focus::Daily,
            Focus::Category => Focus::Monthly,
        }
    }
}

pub struct App {
    pub endpoint: String,
    pub view: ViewState,
    /// Last good snapshot. Kept across a failed refresh but only drawn in `Ready`.
    pub snapshot: Option<SpendingSnapshot>,
    pub last_updated: Option<DateTime<Local>>,
    pub focus: Focus,
    /// Cursor per chart, indexed by `Focus`.
    pub cursors: [usize; 3],
    pub show_help: bool,
    pub quit: bool,
}

impl App {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            view: ViewState::Loading,
            snapshot: None,
            last_updated: None,
            focus: Focus::Daily,
            cursors: [0; 3],
            show_help: false,
            quit: false,
        }
    }

    pub fn apply(&mut self, event: PollEvent) {
        match event {
            PollEvent::Snapshot { snapshot, fetched_at } => {
                self.snapshot = Some(snapshot);
                self.last_updated = Some(fetched_at);
                self.view = ViewState::Ready;
                self.clamp_cursors();
            }
            PollEvent::Failed(msg) => {
                self.view = ViewState::Error(msg);
            }
        }
    }

    /// Returns `true` when the caller should trigger an immediate poll.
    pub fn handle(&mut self, action: Action) -> bool {
        match action {
            Action::Quit => self.quit = true,
            Action::Refresh => return true,
            Action::ToggleHelp => self.show_help = !self.show_help,
            Action::NextFocus => self.focus = self.focus.next(),
            Action::PrevFocus => self.focus = self.focus.prev(),
            Action::Left => self.move_cursor(-1),
            Action::Right => self.move_cursor(1),
        }
        false
    }

    pub fn cursor(&self, focus: Focus) -> usize {
        self.cursors[focus.index()]
    }

    fn series_len(&self, focus: Focus) -> usize {
        let Some(s) = &self.snapshot else { return 0 };
        match focus {
            Focus::Daily => s.spending_over_time.len(),
            Focus::Monthly => s.monthly_trend.len(),
            Focus::Category => s.category_distribution.len(),
        }
    }

    fn move_cursor(&mut self, delta: isize) {
        let n = self.series_len(self.focus);
        let slot = &mut self.cursors[self.focus.index()];
        if n == 0 {
            *slot = 0;
            return;
        }
        let cur = *slot as isize;
        *slot = (cur + delta).rem_euclid(n as isize) as usize;
    }

    fn clamp_cursors(&mut self) {
        for focus in [Focus::Daily, Focus::Monthly, Focus::Category] {
            let n = self.series_len(focus);
            let slot = &mut self.cursors[focus.index()];
            if *slot >= n {
                *slot = n.saturating_sub(1);
            }
        }
    }

    /// Label and amount under the cursor of `focus`.
    pub fn tooltip(&self, focus: Focus) -> Option<(String, Money)> {
        let s = self.snapshot.as_ref()?;
        let i = self.cursor(focus);
        match focus {
            Focus::Daily => s
                .spending_over_time
                .points()
                .get(i)
                .map(|p| (util::fmt_date_tick(&p.date), p.amount)),
            Focus::Monthly => s
                .monthly_trend
                .points()
                .get(i)
                .map(|p| (p.month.clone(), p.amount)),
            Focus::Category => s
                .category_distribution
                .points()
                .get(i)
                .map(|c| (c.category.clone(), c.value)),
        }
    }
}
