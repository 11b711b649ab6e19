//! Scripted in-memory [`PageDriver`] for exercising the extraction logic
//! without a browser.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::driver::PageDriver;
use crate::error::BrowserError;
use crate::picker::{PickerSelectors, YearMonth};

pub(crate) struct FakeState {
    /// Month currently shown by the simulated date-picker.
    pub displayed: YearMonth,
    /// When set, prev/next clicks leave the displayed month unchanged.
    pub stuck: bool,
    pub clicks: Vec<String>,
    pub visited: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

pub(crate) struct FakePage {
    pub state: Mutex<FakeState>,
}

impl FakePage {
    pub fn displaying(displayed: YearMonth) -> Self {
        Self {
            state: Mutex::new(FakeState {
                displayed,
                stuck: false,
                clicks: Vec::new(),
                visited: Vec::new(),
                rows: Vec::new(),
            }),
        }
    }

    pub fn stuck(self) -> Self {
        self.state.lock().unwrap().stuck = true;
        self
    }

    pub fn with_rows(self, rows: Vec<Vec<String>>) -> Self {
        self.state.lock().unwrap().rows = rows;
        self
    }

    /// Picker selectors the fake responds to.
    pub fn picker_selectors() -> PickerSelectors {
        PickerSelectors {
            input: "#fromDate".to_string(),
            header: ".datepicker .header".to_string(),
            prev: ".datepicker .prev".to_string(),
            next: ".datepicker .next".to_string(),
            calendar: ".datepicker .days".to_string(),
        }
    }
}

#[async_trait]
impl PageDriver for FakePage {
    async fn goto(&self, url: &str) -> Result<(), BrowserError> {
        self.state.lock().unwrap().visited.push(url.to_string());
        Ok(())
    }

    async fn click(&self, selector: &str) -> Result<(), BrowserError> {
        let mut state = self.state.lock().unwrap();
        state.clicks.push(selector.to_string());
        let sel = Self::picker_selectors();
        if !state.stuck {
            if selector == sel.prev {
                state.displayed = state.displayed.pred();
            } else if selector == sel.next {
                state.displayed = state.displayed.succ();
            }
        }
        Ok(())
    }

    async fn text(&self, selector: &str) -> Result<String, BrowserError> {
        let state = self.state.lock().unwrap();
        if selector == Self::picker_selectors().header {
            Ok(state.displayed.to_string())
        } else {
            Ok(String::new())
        }
    }

    async fn is_present(&self, _selector: &str) -> Result<bool, BrowserError> {
        Ok(true)
    }

    async fn table_rows(
        &self,
        _row_selector: &str,
        _cell_selector: &str,
    ) -> Result<Vec<Vec<String>>, BrowserError> {
        Ok(self.state.lock().unwrap().rows.clone())
    }
}
