use std::path::Path;

use prost::Message;
use rowschema_common::{
    Result,
    error::{Error, ErrorKind},
};

use crate::{
    checksum,
    defs::{CHECKSUM_SIZE, MESSAGE_LEN_SIZE, schema::Schema},
    schema_builder::SchemaBuilder,
};

/// A validated, length-prefixed and checksummed `Schema` protobuf message.
///
/// This is the form in which schemas travel between processes and are
/// persisted next to the data they describe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaMessage {
    /// `length-message-checksum` buffer.
    buf: Vec<u8>,
}

impl SchemaMessage {
    /// Creates a `SchemaMessage` from a sealed buffer after validating the
    /// frame and its checksum.
    pub fn new(buf: Vec<u8>) -> Result<SchemaMessage> {
        checksum::open_message(&buf, "schema_message")?;
        Ok(SchemaMessage { buf })
    }

    /// Seals `schema` into a new message.
    pub fn from_schema(schema: &Schema) -> SchemaMessage {
        SchemaMessage {
            buf: checksum::seal_message(&schema.encode_to_vec()),
        }
    }

    /// Decodes the schema carried by the message.
    ///
    /// # Errors
    ///
    /// Returns `Protobuf` when the payload is not a valid `Schema` message.
    pub fn schema(&self) -> Result<Schema> {
        Schema::decode(self.payload()).map_err(|source| {
            ErrorKind::Protobuf {
                element: "schema_message".to_string(),
                source,
            }
            .into()
        })
    }

    /// Decodes the schema and checks its structural invariants.
    pub fn validated_schema(&self) -> Result<Schema> {
        let schema = self.schema()?;
        schema.validate()?;
        Ok(schema)
    }

    /// The protobuf payload, without framing.
    pub fn payload(&self) -> &[u8] {
        &self.buf[MESSAGE_LEN_SIZE..self.buf.len() - CHECKSUM_SIZE]
    }

    /// Raw bytes of the sealed message.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }

    /// Reads and validates a sealed message stored in a file.
    pub fn load(path: impl AsRef<Path>) -> Result<SchemaMessage> {
        let path = path.as_ref();
        let buf = std::fs::read(path)
            .map_err(|e| Error::io(format!("reading {}", path.display()), e))?;
        SchemaMessage::new(buf)
    }

    /// Writes the sealed message to a file, replacing its contents.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        std::fs::write(path, &self.buf)
            .map_err(|e| Error::io(format!("writing {}", path.display()), e))
    }
}

impl From<SchemaBuilder> for SchemaMessage {
    fn from(builder: SchemaBuilder) -> SchemaMessage {
        builder.finish_and_seal()
    }
}

impl From<&Schema> for SchemaMessage {
    fn from(schema: &Schema) -> SchemaMessage {
        SchemaMessage::from_schema(schema)
    }
}

#[cfg(test)]
mod tests {
    use rowschema_common::error::ErrorKind;

    use super::SchemaMessage;
    use crate::{
        checksum,
        defs::schema::{AtomicType, Field, FieldType, Schema},
    };

    fn sample() -> Schema {
        Schema {
            fields: vec![
                Field::new("id", FieldType::atomic(AtomicType::Int64)),
                Field::new("tags", FieldType::array(FieldType::atomic(AtomicType::String))),
            ],
            id: "sample".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_seal_and_decode() {
        let message = SchemaMessage::from_schema(&sample());
        let reopened = SchemaMessage::new(message.as_bytes().to_vec()).unwrap();
        assert_eq!(reopened, message);
        assert_eq!(reopened.schema().unwrap(), sample());
        assert_eq!(reopened.validated_schema().unwrap().id, "sample");
    }

    #[test]
    fn test_garbage_payload() {
        let buf = checksum::seal_message(&[0xff, 0xff, 0xff]);
        let message = SchemaMessage::new(buf).unwrap();
        assert!(matches!(
            message.schema().unwrap_err().kind(),
            ErrorKind::Protobuf { .. }
        ));
    }

    #[test]
    fn test_rejects_unsealed_bytes() {
        assert!(SchemaMessage::new(vec![1, 2, 3]).is_err());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sample.schema");
        let message = SchemaMessage::from_schema(&sample());
        message.save(&path).unwrap();
        assert_eq!(SchemaMessage::load(&path).unwrap(), message);

        let err = SchemaMessage::load(dir.path().join("missing")).unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::Io { .. }));
    }
}
