use crate::{
    document::{
        Block, BridgeObject, ClassMap, Database, Identity, Prefix, PropertyBridge, Subject,
    },
    vocab::{self, D2RQ},
    Document,
};

use std::fmt::{self, Display, Formatter};

/// A quoted string literal.
struct Literal<'a>(&'a str);

/// A URI or CURIE in object position. Anything that is not a CURIE over a
/// declared prefix is written as an IRI, in angle brackets.
struct Term<'a>(&'a str);

/// `map:name`
struct Node<'a>(&'a str);

impl Display for Literal<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("\"")?;
        for ch in self.0.chars() {
            match ch {
                '"' => f.write_str("\\\"")?,
                '\\' => f.write_str("\\\\")?,
                '\n' => f.write_str("\\n")?,
                '\r' => f.write_str("\\r")?,
                '\t' => f.write_str("\\t")?,
                ch => write!(f, "{ch}")?,
            }
        }
        f.write_str("\"")
    }
}

impl Display for Term<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let term = self.0;
        if term.starts_with('<') || is_curie(term) {
            f.write_str(term)
        } else {
            write!(f, "<{term}>")
        }
    }
}

impl Display for Node<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", vocab::MAP, self.0)
    }
}

fn is_curie(term: &str) -> bool {
    match term.split_once(':') {
        Some((prefix, _)) => vocab::PREFIXES.iter().any(|(name, _)| *name == prefix),
        None => false,
    }
}

/// Writes one `subject a type; ... .` block.
struct BlockWriter<'a, 'b> {
    f: &'a mut Formatter<'b>,
}

impl<'a, 'b> BlockWriter<'a, 'b> {
    fn start(f: &'a mut Formatter<'b>, name: &str, ty: &str) -> Result<Self, fmt::Error> {
        writeln!(f, "{} a {ty};", Node(name))?;
        Ok(Self { f })
    }

    fn line(&mut self, property: &str, object: impl Display) -> fmt::Result {
        writeln!(self.f, "\t{property} {object};")
    }

    fn identity(&mut self, identity: &Identity) -> fmt::Result {
        match identity.pattern() {
            Some(pattern) => self.line(D2RQ::URI_PATTERN, Literal(&pattern)),
            None => self.line(D2RQ::URI_COLUMN, Literal(identity.column())),
        }
    }

    fn conditions(&mut self, conditions: &[String]) -> fmt::Result {
        for condition in conditions {
            self.line(D2RQ::CONDITION, Literal(condition))?;
        }
        Ok(())
    }

    fn finish(self) -> fmt::Result {
        writeln!(self.f, "\t.")
    }
}

impl Display for Prefix {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "@prefix {}: <{}> .", self.name, self.iri)
    }
}

impl Display for Database {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut w = BlockWriter::start(f, vocab::DATABASE_BLOCK, D2RQ::DATABASE)?;
        w.line(D2RQ::JDBC_DRIVER, Literal(&self.jdbc_driver))?;
        w.line(D2RQ::JDBC_DSN, Literal(&self.jdbc_dsn))?;
        if let Some(username) = &self.username {
            w.line(D2RQ::USERNAME, Literal(username))?;
        }
        if let Some(password) = &self.password {
            w.line(D2RQ::PASSWORD, Literal(password))?;
        }
        w.line(D2RQ::FETCH_SIZE, Literal(&self.fetch_size.to_string()))?;
        w.finish()
    }
}

impl Display for ClassMap {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut w = BlockWriter::start(f, &self.name, D2RQ::CLASS_MAP)?;
        w.line(D2RQ::DATA_STORAGE, Node(vocab::DATABASE_BLOCK))?;

        match &self.subject {
            Subject::Identity(identity) => w.identity(identity)?,
            Subject::Constant(uri) => w.line(D2RQ::CONSTANT_VALUE, Term(uri))?,
        }

        w.line(D2RQ::CLASS, Term(&self.class))?;
        w.conditions(&self.conditions)?;
        w.finish()
    }
}

impl Display for PropertyBridge {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut w = BlockWriter::start(f, &self.name, D2RQ::PROPERTY_BRIDGE)?;
        w.line(D2RQ::BELONGS_TO_CLASS_MAP, Node(&self.belongs_to))?;
        w.line(D2RQ::PROPERTY, Term(&self.property))?;

        match &self.object {
            BridgeObject::Column(column) => w.line(D2RQ::COLUMN, Literal(column))?,
            BridgeObject::Identity(identity) => w.identity(identity)?,
            BridgeObject::RefersTo { class_map, joins } => {
                w.line(D2RQ::REFERS_TO_CLASS_MAP, Node(class_map))?;
                for join in joins {
                    w.line(D2RQ::JOIN, Literal(join))?;
                }
            }
        }

        w.conditions(&self.conditions)?;
        w.finish()
    }
}

impl Display for Block {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Block::ClassMap(class_map) => class_map.fmt(f),
            Block::PropertyBridge(bridge) => bridge.fmt(f),
        }
    }
}

impl Display for Document {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if !self.generated_at.is_empty() {
            writeln!(f, "# Generated {}", self.generated_at)?;
            writeln!(f)?;
        }

        for prefix in &self.prefixes {
            writeln!(f, "{prefix}")?;
        }
        writeln!(f)?;

        write!(f, "{}", self.database)?;

        for block in &self.blocks {
            writeln!(f)?;
            write!(f, "{block}")?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terms() {
        assert_eq!(
            Term("http://rs.tdwg.org/dwc/terms/Occurrence").to_string(),
            "<http://rs.tdwg.org/dwc/terms/Occurrence>"
        );
        assert_eq!(Term("urn:x:dataset").to_string(), "<urn:x:dataset>");
        assert_eq!(Term("ark:/21547/R2").to_string(), "<ark:/21547/R2>");
        assert_eq!(Term("dwc:Occurrence").to_string(), "dwc:Occurrence");
        assert_eq!(Term("<already>").to_string(), "<already>");
        assert_eq!(Term("Specimen").to_string(), "<Specimen>");
    }

    #[test]
    fn literals_are_escaped() {
        assert_eq!(Literal(r#"a "b" \c"#).to_string(), r#""a \"b\" \\c""#);
        assert_eq!(Literal("urn:x:\r\t\n").to_string(), r#""urn:x:\r\t\n""#);
    }
}
