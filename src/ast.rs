/// A complete parsed source text.
///
/// The program owns every statement; the statements own their expressions.
/// There is no sharing between nodes.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    /// Top-level statements in source order.
    pub body: Vec<Statement>,
}

/// Represents a statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// A variable declaration using `let` or `const`.
    VarDeclaration {
        /// The name being declared.
        identifier: String,
        /// Whether the binding was declared with `const`.
        constant:   bool,
        /// The initial value. `None` for `let x;`.
        value:      Option<Expr>,
        /// Line number in the source code.
        line:       usize,
    },
    /// A named function declaration.
    ///
    /// The grammar has no syntax for this yet; hosts construct it directly.
    FunctionDeclaration(FunctionDeclaration),
    /// A standalone expression evaluated for its result.
    Expression {
        /// The expression to evaluate.
        expr: Expr,
        /// Line number in the source code.
        line: usize,
    },
}

impl Statement {
    /// Gets the line number from `self`.
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::VarDeclaration { line, .. } | Self::Expression { line, .. } => *line,
            Self::FunctionDeclaration(declaration) => declaration.line,
        }
    }
}

/// A user-defined function declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDeclaration {
    /// The name of the function.
    pub name:       String,
    /// Parameter names, bound positionally on each call.
    pub parameters: Vec<String>,
    /// Statements evaluated on each call. The last one yields the result.
    pub body:       Vec<Statement>,
    /// Line number in the source code.
    pub line:       usize,
}

/// An abstract syntax tree node representing an expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Reference to a variable by name.
    Identifier {
        /// Name of the variable.
        symbol: String,
        /// Line number in the source code.
        line:   usize,
    },
    /// A number literal.
    NumericLiteral {
        /// The literal value.
        value: f64,
        /// Line number in the source code.
        line:  usize,
    },
    /// An arithmetic operation.
    BinaryExpr {
        /// Left operand.
        left:     Box<Self>,
        /// Right operand.
        right:    Box<Self>,
        /// The operator.
        operator: BinaryOperator,
        /// Line number in the source code.
        line:     usize,
    },
    /// An assignment such as `x = 2`.
    ///
    /// The target is any expression so that `a.b = 1` parses; only identifier
    /// targets evaluate.
    AssignmentExpr {
        /// The assignment target.
        assignee: Box<Self>,
        /// The value being assigned.
        value:    Box<Self>,
        /// Line number in the source code.
        line:     usize,
    },
    /// Member access, `object.property` or `object[property]`.
    MemberExpr {
        /// The object being accessed.
        object:   Box<Self>,
        /// The property. Always an [`Expr::Identifier`] when not computed.
        property: Box<Self>,
        /// `true` for `[expr]` access, `false` for `.name` access.
        computed: bool,
        /// Line number in the source code.
        line:     usize,
    },
    /// A call such as `f(1, 2)`.
    CallExpr {
        /// The expression producing the function.
        caller:    Box<Self>,
        /// Arguments to the function.
        arguments: Vec<Self>,
        /// Line number in the source code.
        line:      usize,
    },
    /// An object literal such as `{ a: 1, b }`.
    ObjectLiteral {
        /// Properties in source order.
        properties: Vec<Property>,
        /// Line number in the source code.
        line:       usize,
    },
}

impl Expr {
    /// Gets the line number from `self`.
    /// ## Example
    /// ```
    /// use ember::ast::Expr;
    ///
    /// let expr = Expr::Identifier { symbol: "x".to_string(),
    ///                               line:   5, };
    ///
    /// assert_eq!(expr.line_number(), 5);
    /// ```
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Identifier { line, .. }
            | Self::NumericLiteral { line, .. }
            | Self::BinaryExpr { line, .. }
            | Self::AssignmentExpr { line, .. }
            | Self::MemberExpr { line, .. }
            | Self::CallExpr { line, .. }
            | Self::ObjectLiteral { line, .. } => *line,
        }
    }

    /// Name of the node kind, used in diagnostics.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Identifier { .. } => "Identifier",
            Self::NumericLiteral { .. } => "NumericLiteral",
            Self::BinaryExpr { .. } => "BinaryExpr",
            Self::AssignmentExpr { .. } => "AssignmentExpr",
            Self::MemberExpr { .. } => "MemberExpr",
            Self::CallExpr { .. } => "CallExpr",
            Self::ObjectLiteral { .. } => "ObjectLiteral",
        }
    }
}

/// A single entry of an object literal.
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    /// The key.
    pub key:   String,
    /// The value expression. `None` is the shorthand `{ key }`, which reads
    /// the variable named `key` when evaluated.
    pub value: Option<Expr>,
    /// Line number in the source code.
    pub line:  usize,
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Modulo (`%`)
    Mod,
}

impl BinaryOperator {
    /// Maps an operator lexeme to its operator.
    ///
    /// ```
    /// use ember::ast::BinaryOperator;
    ///
    /// assert_eq!(BinaryOperator::from_symbol("%"), Some(BinaryOperator::Mod));
    /// assert_eq!(BinaryOperator::from_symbol("^"), None);
    /// ```
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(Self::Add),
            "-" => Some(Self::Sub),
            "*" => Some(Self::Mul),
            "/" => Some(Self::Div),
            "%" => Some(Self::Mod),
            _ => None,
        }
    }

    /// Whether the operator belongs to the additive precedence level.
    #[must_use]
    pub const fn is_additive(self) -> bool {
        matches!(self, Self::Add | Self::Sub)
    }

    /// Whether the operator belongs to the multiplicative precedence level.
    #[must_use]
    pub const fn is_multiplicative(self) -> bool {
        matches!(self, Self::Mul | Self::Div | Self::Mod)
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
        };
        write!(f, "{operator}")
    }
}
