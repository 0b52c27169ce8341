use std::io::Write;

use anyhow::Result;

use crate::cli::{DirectDepsOptionLabel, DirectDepsOptionOutput, DirectDepsOptionSource, Mode};

pub(crate) struct Report<'a> {
    package: &'a str,
    repo: &'a str,
    mode: Mode,
    output: &'a str,
    filter: &'a str,
    dependencies: &'a [String],
}

impl<'a> Report<'a> {
    pub(crate) fn new<Option>(option: &'a Option, dependencies: &'a [String]) -> Self
    where
        Option: DirectDepsOptionSource + DirectDepsOptionOutput + DirectDepsOptionLabel,
    {
        Self {
            package: option.package(),
            repo: option.repo(),
            mode: option.mode(),
            output: option.output(),
            filter: option.filter(),
            dependencies,
        }
    }

    pub(crate) fn write(&self, mut out: impl Write) -> Result<()> {
        writeln!(out, "Parameters:")?;
        writeln!(out, "  package = {}", self.package)?;
        writeln!(out, "  repo    = {}", self.repo)?;
        writeln!(out, "  mode    = {}", self.mode)?;
        writeln!(out, "  output  = {}", self.output)?;
        writeln!(out, "  filter  = {}", self.filter)?;

        writeln!(out)?;
        writeln!(out, "Direct dependencies:")?;

        if self.dependencies.is_empty() {
            writeln!(out, "  No dependencies.")?;
        }

        for dependency in self.dependencies {
            writeln!(out, "  - {dependency}")?;
        }

        Ok(())
    }
}
