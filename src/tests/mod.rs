pub mod common;

#[cfg(test)]
mod test_report_pipeline;
