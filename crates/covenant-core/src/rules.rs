use serde::{Deserialize, Serialize};

/// The fixed violation catalog.
///
/// Each rule carries a stable code and one canonical description string.
/// The catalog is closed: no rule is added or removed at runtime.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Rule {
    /// S1 — a syntax construct outside the permitted subset.
    IllegalSyntax,
    /// S2 — identifier reserved by the leading/trailing underscore convention.
    SystemVariable,
    /// S3 — import statement nested inside a block body.
    NestedImport,
    /// S4 — selective (`from X import Y`) import.
    ImportFrom,
    /// S5 — reserved for the external dependency resolver; never emitted here.
    ContractNotFound,
    /// S6 — class definition.
    ClassDefinition,
    /// S7 — async function definition.
    AsyncFunction,
    /// S8 — decorator outside the valid set.
    InvalidDecorator,
    /// S9 — more than one constructor-decorated function.
    MultipleConstructors,
    /// S10 — more than one decorator on a function.
    MultipleDecorators,
    /// S11 — explicit `contract`/`name` keyword on a storage constructor.
    OrmKeywordOverload,
    /// S12 — storage constructor bound to multiple targets.
    OrmMultipleTargets,
    /// S13 — no export-decorated function in the whole tree.
    NoExportDecorator,
    /// S14 — reference to a builtin outside the allow-list.
    IllegalBuiltin,
    /// S15 — function argument shadows a storage binding name.
    OrmNameReuse,
    /// S16 — argument annotation outside the whitelist.
    IllegalAnnotation,
    /// S17 — exported-function argument without an annotation.
    MissingAnnotation,
    /// S18 — return annotation on an exported function.
    ReturnAnnotation,
    /// S19 — function definition nested inside a function body.
    NestedFunction,
}

impl Rule {
    /// All catalog entries in code order.
    pub const ALL: [Rule; 19] = [
        Rule::IllegalSyntax,
        Rule::SystemVariable,
        Rule::NestedImport,
        Rule::ImportFrom,
        Rule::ContractNotFound,
        Rule::ClassDefinition,
        Rule::AsyncFunction,
        Rule::InvalidDecorator,
        Rule::MultipleConstructors,
        Rule::MultipleDecorators,
        Rule::OrmKeywordOverload,
        Rule::OrmMultipleTargets,
        Rule::NoExportDecorator,
        Rule::IllegalBuiltin,
        Rule::OrmNameReuse,
        Rule::IllegalAnnotation,
        Rule::MissingAnnotation,
        Rule::ReturnAnnotation,
        Rule::NestedFunction,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Rule::IllegalSyntax => "S1",
            Rule::SystemVariable => "S2",
            Rule::NestedImport => "S3",
            Rule::ImportFrom => "S4",
            Rule::ContractNotFound => "S5",
            Rule::ClassDefinition => "S6",
            Rule::AsyncFunction => "S7",
            Rule::InvalidDecorator => "S8",
            Rule::MultipleConstructors => "S9",
            Rule::MultipleDecorators => "S10",
            Rule::OrmKeywordOverload => "S11",
            Rule::OrmMultipleTargets => "S12",
            Rule::NoExportDecorator => "S13",
            Rule::IllegalBuiltin => "S14",
            Rule::OrmNameReuse => "S15",
            Rule::IllegalAnnotation => "S16",
            Rule::MissingAnnotation => "S17",
            Rule::ReturnAnnotation => "S18",
            Rule::NestedFunction => "S19",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Rule::IllegalSyntax => "S1- Illegal contracting syntax type used",
            Rule::SystemVariable => "S2- Illicit use of '_' before variable",
            Rule::NestedImport => "S3- Illicit use of Nested imports",
            Rule::ImportFrom => "S4- ImportFrom compilation nodes not yet supported",
            Rule::ContractNotFound => "S5- Contract not found in lib",
            Rule::ClassDefinition => "S6- Illicit use of classes",
            Rule::AsyncFunction => "S7- Illicit use of Async functions",
            Rule::InvalidDecorator => "S8- Invalid decorator used",
            Rule::MultipleConstructors => "S9- Multiple use of constructors detected",
            Rule::MultipleDecorators => "S10- Illicit use of multiple decorators",
            Rule::OrmKeywordOverload => {
                "S11- Illicit keyword overloading for ORM assignments"
            }
            Rule::OrmMultipleTargets => "S12- Multiple targets to ORM definition detected",
            Rule::NoExportDecorator => "S13- No valid contracting decorator found",
            Rule::IllegalBuiltin => "S14- Illegal use of a builtin",
            Rule::OrmNameReuse => {
                "S15- Reuse of ORM name definition in a function definition argument name"
            }
            Rule::IllegalAnnotation => "S16- Illegal argument annotation used",
            Rule::MissingAnnotation => "S17- No valid argument annotation found",
            Rule::ReturnAnnotation => "S18- Illegal use of return annotation",
            Rule::NestedFunction => "S19- Illegal use of a nested function definition.",
        }
    }
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.description())
    }
}
