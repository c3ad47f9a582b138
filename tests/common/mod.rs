#![allow(dead_code)]

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use tracing_subscriber::fmt::MakeWriter;

/// In-memory log writer shared between the sink and the test body.
#[derive(Clone, Default)]
pub struct CaptureWriter(Arc<Mutex<Vec<u8>>>);

impl CaptureWriter {
    pub fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }

    /// Message part of every `timestamp - target - LEVEL - message` line.
    pub fn messages(&self) -> Vec<String> {
        self.contents()
            .lines()
            .map(|line| line.splitn(4, " - ").nth(3).unwrap_or_default().to_string())
            .collect()
    }
}

impl Write for CaptureWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CaptureWriter {
    type Writer = CaptureWriter;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

pub const EXPECTED_MESSAGES: [&str; 18] = [
    "Starting sales transformation (demo mode)",
    "Configuration:",
    "  Project ID: demo-project",
    "  Dataset: sales_data",
    "  Input Table: staging_raw_transactions",
    "  Output Table: transformed_sales",
    "  Execution ID: local-run",
    "  Pipeline: daily_etl",
    "  Task: transform",
    "Step 1: Loading data from staging table...",
    "Step 2: Calculating tax amounts...",
    "Step 3: Categorizing products...",
    "Step 4: Computing customer segments...",
    "Step 5: Validating output data...",
    "Step 6: Saving to destination table...",
    "Transformation completed successfully",
    "Records processed: 1250 -> 1248",
    "Total revenue: $125,847.50",
];
