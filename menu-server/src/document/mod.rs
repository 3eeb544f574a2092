//! Menu document access
//!
//! The only layer that looks at raw XML. Everything above it receives typed
//! shared models, so coercion and shape validation happen here and nowhere
//! else.
//!
//! Expected shape:
//!
//! ```text
//! <root brandid="..">
//!   <menu><categories>
//!     <category id=".."><products>
//!       <product id=".."><pricing><price>9.99</price></pricing>
//!         <modifiers><optiongroup chainid=".."><options>
//!           <option chainid=".."><pricing><price>0.50</price></pricing>
//!             <modifiers><optiongroup ..>..</optiongroup></modifiers>
//!           </option>
//!         </options></optiongroup></modifiers>
//!       </product>
//!     </products></category>
//!   </categories></menu>
//! </root>
//! ```

mod accessor;
mod records;

pub use accessor::{
    child, children, decimal_attr, flag_attr, int_attr, node_path, price, required_attr,
    required_child, section, text_attr,
};
pub use records::{
    brand_id, categories, modifier_groups, options, products, read_category, read_option,
    read_option_group, read_product,
};

pub use roxmltree::{Document, Node};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("failed to parse menu document: {0}")]
    Xml(#[from] roxmltree::Error),

    #[error("malformed menu document at {path}: {reason}")]
    Malformed { path: String, reason: String },
}

impl DocumentError {
    pub fn malformed(node: Node<'_, '_>, reason: impl Into<String>) -> Self {
        DocumentError::Malformed {
            path: node_path(node),
            reason: reason.into(),
        }
    }
}

pub type DocumentResult<T> = Result<T, DocumentError>;

/// Parse menu XML into a document tree.
pub fn parse(text: &str) -> DocumentResult<Document<'_>> {
    Ok(Document::parse(text)?)
}
