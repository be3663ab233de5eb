//! Example 04 – No required fields
//!
//! Without required fields the lattice has a single state, `Initial`, and it builds.

use anyhow::Result;

use crate::FluentBuilder;

#[derive(FluentBuilder, Debug, PartialEq)]
pub struct Settings {
    pub verbose: bool,
    pub level: char,
    #[builder(skip)]
    pub cache: Vec<u8>,
}

#[derive(FluentBuilder, Debug, PartialEq)]
pub struct Marker;

/// Example 04 – records that can be built straight away.
pub fn run() -> Result<()> {
    use settings_builder::WithOptionals;

    let defaults = Settings::builder().build();
    assert_eq!(
        defaults,
        Settings {
            verbose: false,
            level: '\0',
            cache: Vec::new(),
        }
    );

    let loud: Settings = Settings::builder().verbose(true).level('d').build();
    assert!(loud.verbose);
    assert_eq!(loud.level, 'd');

    let marker: Marker = marker_builder::builder().build();
    assert_eq!(marker, Marker);

    Ok(())
}
