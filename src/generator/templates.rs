use askama::Template;

/// A struct field together with the matching constructor parameter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDef {
    /// Go identifier shared by the field and the constructor parameter
    pub name: String,
    /// Go type as declared
    pub ty: String,
}

impl FieldDef {
    #[must_use]
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }
}

/// Template data for an interface's state struct and its constructor
#[derive(Template)]
#[template(path = "service_impl.go.txt", escape = "none")]
pub struct ServiceImplTemplateData {
    /// Interface name; the struct is `<name>Impl`, the constructor `New<name>`
    pub name: String,
    /// Logger field (when configured) followed by one field per dependency
    pub fields: Vec<FieldDef>,
    /// Rendered constructor parameter list
    pub params: String,
}

/// Template data for one stub method
#[derive(Template)]
#[template(path = "method_stub.go.txt", escape = "none")]
pub struct MethodStubTemplateData {
    pub receiver: String,
    pub struct_name: String,
    pub method: String,
    /// Rendered parameter list, including the leading context parameter
    pub params: String,
    /// Wrapper type returned by the method
    pub return_type: String,
    /// Generic constructor of the failed wrapper, e.g. `mono.Error[string]`
    pub error_ctor: String,
}

/// Render a template, normalising the trailing newline so sections join predictably.
pub fn render_section<T: Template>(data: &T) -> anyhow::Result<String> {
    let rendered = data.render()?;
    Ok(rendered.trim_end().to_string())
}
