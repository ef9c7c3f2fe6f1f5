//! # GSharp AST
//!
//! One closed tagged-variant type covering every statement and expression
//! form. Each statement is parsed into one [`Ast`] wrapped in a
//! [`Statement`] carrying its source line.

use gsharp_geometry::FigureKind;
use std::fmt;

// =============================================================================
// STATEMENT
// =============================================================================

/// One parsed statement with the line it starts on.
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    /// The statement's syntax tree.
    pub node: Ast,
    /// 1-based source line.
    pub line: usize,
}

impl Statement {
    /// Create a new statement.
    pub fn new(node: Ast, line: usize) -> Self {
        Self { node, line }
    }
}

// =============================================================================
// AST
// =============================================================================

/// A GSharp syntax tree node.
#[derive(Debug, Clone, PartialEq)]
pub enum Ast {
    /// Number, string or boolean literal.
    Value(Literal),

    /// A name reference.
    Identifier(String),

    /// Binary arithmetic or comparison.
    ///
    /// Unary minus is desugared to `0 - x`.
    Binary {
        /// Left operand.
        left: Box<Ast>,
        /// Operator.
        op: BinaryOp,
        /// Right operand.
        right: Box<Ast>,
    },

    /// `if c then a else b`
    If {
        /// Condition, must evaluate to a boolean.
        condition: Box<Ast>,
        /// Value when true.
        then_branch: Box<Ast>,
        /// Value when false.
        else_branch: Box<Ast>,
    },

    /// `let x = v in body`
    Let {
        /// Bound name.
        name: String,
        /// Bound value.
        value: Box<Ast>,
        /// Scope of the binding.
        body: Box<Ast>,
    },

    /// `let a = 1, b = 2 in body` or `let -> { a = 1, b = 2 } in body`
    LetMulti {
        /// Bindings, all evaluated in the enclosing scope.
        bindings: Vec<(String, Ast)>,
        /// Scope of the bindings.
        body: Box<Ast>,
    },

    /// `const a = v`, `a = v` or `const a, b = seq`
    ConstDecl {
        /// Declared names. More than one means destructuring.
        names: Vec<String>,
        /// Declared value.
        value: Box<Ast>,
    },

    /// `a, b, c = seq`
    MultiAssign {
        /// Destructuring targets.
        names: Vec<String>,
        /// Sequence-valued expression.
        value: Box<Ast>,
    },

    /// `function name(p1, p2) => body`
    FunctionDecl {
        /// Function name.
        name: String,
        /// Parameter names.
        params: Vec<String>,
        /// Body expression, evaluated per call.
        body: Box<Ast>,
    },

    /// Call of a user-declared function.
    FunctionCall {
        /// Function name.
        name: String,
        /// Argument expressions.
        args: Vec<Ast>,
    },

    /// Call of a built-in numeric function such as `Sqrt`.
    PredefinedCall {
        /// Function name.
        name: String,
        /// Argument expressions.
        args: Vec<Ast>,
    },

    /// `measure(p1, p2)`
    Measure {
        /// First point.
        from: Box<Ast>,
        /// Second point.
        to: Box<Ast>,
    },

    /// `{ ... }` literal.
    Sequence(SequenceLiteral),

    /// `intersect(f1, f2)`
    Intersect {
        /// First figure.
        first: Box<Ast>,
        /// Second figure.
        second: Box<Ast>,
    },

    /// `draw target "label"?`
    Draw {
        /// Figure, name or sequence to draw.
        target: Box<Ast>,
        /// Label overriding the figure's own comment.
        label: Option<String>,
    },

    /// `color name`
    ColorPush(String),

    /// `restore`
    ColorPop,

    /// Point or figure declaration.
    Figure(FigureDecl),

    /// Empty statement.
    End,
}

impl Ast {
    /// Numeric literal node.
    pub fn number(value: f64) -> Self {
        Self::Value(Literal::Number(value))
    }

    /// Binary node.
    pub fn binary(left: Ast, op: BinaryOp, right: Ast) -> Self {
        Self::Binary {
            left: Box::new(left),
            op,
            right: Box::new(right),
        }
    }
}

// =============================================================================
// LITERALS AND OPERATORS
// =============================================================================

/// Scalar literal.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    /// Number literal.
    Number(f64),
    /// String literal.
    Str(String),
    /// `true` / `false`.
    Bool(bool),
}

/// Binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `^`
    Pow,
    /// `%`
    Mod,
    /// `<`
    Lt,
    /// `>`
    Gt,
    /// `<=`
    LtEq,
    /// `>=`
    GtEq,
    /// `==`
    Eq,
    /// `!=`
    NotEq,
}

impl BinaryOp {
    /// Source symbol.
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Pow => "^",
            Self::Mod => "%",
            Self::Lt => "<",
            Self::Gt => ">",
            Self::LtEq => "<=",
            Self::GtEq => ">=",
            Self::Eq => "==",
            Self::NotEq => "!=",
        }
    }

    /// Whether the operator yields a boolean.
    pub const fn is_comparison(&self) -> bool {
        matches!(
            self,
            Self::Lt | Self::Gt | Self::LtEq | Self::GtEq | Self::Eq | Self::NotEq
        )
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

// =============================================================================
// SEQUENCES
// =============================================================================

/// A `{ ... }` literal.
///
/// - `{1, 2, 3}`: three elements, no tail
/// - `{1 ... 5}`: one element, tail `UpTo(5)`
/// - `{1 ...}`: one element, tail `Unbounded`
#[derive(Debug, Clone, PartialEq)]
pub struct SequenceLiteral {
    /// Explicit elements.
    pub elements: Vec<Ast>,
    /// Continuation after the explicit elements.
    pub tail: Option<SequenceTail>,
    /// Name when declared as `name = { ... }`.
    pub name: Option<String>,
}

/// Continuation of a sequence literal after `...`.
#[derive(Debug, Clone, PartialEq)]
pub enum SequenceTail {
    /// Continue in steps of one up to and including the bound.
    UpTo(Box<Ast>),
    /// Continue forever, lazily.
    Unbounded,
}

// =============================================================================
// FIGURES
// =============================================================================

/// A figure declaration such as `circle c(p, 3) "label"`.
#[derive(Debug, Clone, PartialEq)]
pub struct FigureDecl {
    /// Which figure.
    pub kind: FigureKind,
    /// Name to register the figure under.
    pub name: Option<String>,
    /// Construction arguments. `None` means random placement.
    pub args: Option<FigureArgs>,
    /// Trailing comment string.
    pub comment: Option<String>,
}

/// Construction arguments, already checked for arity.
#[derive(Debug, Clone, PartialEq)]
pub enum FigureArgs {
    /// `point(x, y)`
    Point {
        /// X coordinate.
        x: Box<Ast>,
        /// Y coordinate.
        y: Box<Ast>,
    },
    /// `line(a, b)`, `segment(a, b)`, `ray(a, b)`
    Linear {
        /// First point.
        a: Box<Ast>,
        /// Second point.
        b: Box<Ast>,
    },
    /// `circle(center, radius)`
    Circle {
        /// Center point.
        center: Box<Ast>,
        /// Radius.
        radius: Box<Ast>,
    },
    /// `arc(center, start, end, radius?)`
    Arc {
        /// Center point.
        center: Box<Ast>,
        /// Point giving the start direction.
        start: Box<Ast>,
        /// Point giving the end direction.
        end: Box<Ast>,
        /// Radius, defaults to the distance from center to start.
        radius: Option<Box<Ast>>,
    },
}

// =============================================================================
// TESTS
// =============================================================================
