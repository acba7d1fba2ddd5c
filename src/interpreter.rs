/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a flat stream of tokens,
/// each carrying its kind, its exact text and its line. This is the first
/// stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens.
/// - Separates keywords from identifiers.
/// - Reports the first unrecognised character as a lexical error.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// A recursive-descent parser with one token of lookahead. Each precedence
/// level of the expression grammar has its own function.
///
/// # Responsibilities
/// - Converts tokens into statements and expressions.
/// - Encodes operator precedence and associativity.
/// - Reports the first syntax error; no partial tree is ever returned.
pub mod parser;
/// The environment module implements lexical scoping.
///
/// Scopes live in an arena and link to their parent by handle. Names are
/// declared per scope, resolved by walking towards the root, and may be
/// protected against reassignment.
///
/// # Responsibilities
/// - Declaration, lookup and assignment of variables.
/// - Constant enforcement.
/// - Lifetime of call scopes.
pub mod environment;
/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator walks the tree depth-first against the environment,
/// dispatching on the node kind.
///
/// # Responsibilities
/// - Evaluates literals, identifiers, arithmetic, object literals,
///   assignments and calls.
/// - Executes declarations and whole programs.
/// - Reports evaluation and resolution errors.
pub mod evaluator;
/// The value module defines the runtime data types for evaluation.
///
/// # Responsibilities
/// - Defines the `Value` enum and all supported value variants.
/// - Defines object values and native and user function values.
pub mod value;
