use serde::Serialize;

use crate::{
    config::{ConfigInput, JobTemplate},
    error::Result,
    fragment::parse_fragments,
    topology::{encode_topology, Topology},
};

/// A complete job document: the template settings with the topology of one
/// molecule spliced in.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct JobDocument {
    #[serde(flatten)]
    pub template: JobTemplate,
    pub topology: Topology,
}

impl JobDocument {
    pub fn new(template: JobTemplate, topology: Topology) -> Self {
        Self { template, topology }
    }

    /// Serializes the document with sorted keys and 4 space indentation,
    /// terminated by a newline.
    pub fn to_json_pretty(&self) -> serde_json::Result<Vec<u8>> {
        // going through `Value` sorts the keys of every object
        let value = serde_json::to_value(self)?;

        let mut buffer = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
        value.serialize(&mut serializer)?;
        buffer.push(b'\n');

        Ok(buffer)
    }
}

/// Builds the job document for `input` on top of `template`.
pub fn convert(input: &ConfigInput, template: &JobTemplate) -> Result<JobDocument> {
    log::debug!("using job template version {}", JobTemplate::VERSION);

    let fragments = parse_fragments(input)?;
    let topology = encode_topology(&fragments);

    Ok(JobDocument::new(template.clone(), topology))
}
