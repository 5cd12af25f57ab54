//! Document-path model template.

/// Schema module for the document path. Fields render in declared order,
/// every one marked required; the type token is the declared type with its
/// first letter upper-cased.
pub const MODEL_DOCUMENT: &str = r"const mongoose = require('../config/database');

const Schema = mongoose.Schema;

const {{entity}}Schema = new Schema({
{{#each fields}}
  {{this.name}}: { type: {{this.schema_type}}, required: true }{{#unless @last}},{{/unless}}
{{/each}}
});

module.exports = mongoose.model('{{entity}}', {{entity}}Schema);
";
