use crate::expression::errors::ExpressionError;

/// Arithmetic expression tree built from the input numbers
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Number(f64),
    Add(Box<Expression>, Box<Expression>),
    Sub(Box<Expression>, Box<Expression>),
    Mul(Box<Expression>, Box<Expression>),
    Div(Box<Expression>, Box<Expression>),
}

/// Borrowed view of one node
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape<'a> {
    Leaf(f64),
    Binary(Operator, &'a Expression, &'a Expression),
}

/// The four operators the search combines sub-expressions with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    pub const ALL: [Operator; 4] = [Operator::Add, Operator::Sub, Operator::Mul, Operator::Div];

    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
        }
    }

    /// `a op b == b op a` for every operand pair
    pub fn is_commutative(self) -> bool {
        matches!(self, Operator::Add | Operator::Mul)
    }

    /// Build the node `left op right`, taking ownership of both sub-trees.
    pub fn combine(self, left: Expression, right: Expression) -> Expression {
        let (l, r) = (Box::new(left), Box::new(right));
        match self {
            Operator::Add => Expression::Add(l, r),
            Operator::Sub => Expression::Sub(l, r),
            Operator::Mul => Expression::Mul(l, r),
            Operator::Div => Expression::Div(l, r),
        }
    }
}

impl TryFrom<char> for Operator {
    type Error = ExpressionError;

    fn try_from(symbol: char) -> Result<Self, Self::Error> {
        match symbol {
            '+' => Ok(Operator::Add),
            '-' => Ok(Operator::Sub),
            '*' => Ok(Operator::Mul),
            '/' => Ok(Operator::Div),
            other => Err(ExpressionError::UnknownOperator(other)),
        }
    }
}

impl Expression {
    /// Checked leaf constructor.
    ///
    /// # Errors
    ///
    /// Returns [`ExpressionError::NonFiniteNumber`] for NaN or infinite values.
    pub fn number(value: f64) -> Result<Self, ExpressionError> {
        if value.is_finite() {
            Ok(Expression::Number(value))
        } else {
            Err(ExpressionError::NonFiniteNumber(value))
        }
    }

    /// Leaf value or operator and children, whichever this node is
    pub fn shape(&self) -> Shape<'_> {
        match self {
            Expression::Number(n) => Shape::Leaf(*n),
            Expression::Add(l, r) => Shape::Binary(Operator::Add, l, r),
            Expression::Sub(l, r) => Shape::Binary(Operator::Sub, l, r),
            Expression::Mul(l, r) => Shape::Binary(Operator::Mul, l, r),
            Expression::Div(l, r) => Shape::Binary(Operator::Div, l, r),
        }
    }

    /// Operator and children of an operation node, `None` for a leaf
    pub fn as_binary(&self) -> Option<(Operator, &Expression, &Expression)> {
        match self.shape() {
            Shape::Leaf(_) => None,
            Shape::Binary(op, l, r) => Some((op, l, r)),
        }
    }

    /// Number of nodes on the longest root-to-leaf path. A missing child
    /// counts as height 0, so a leaf has height 1.
    pub fn height(&self) -> usize {
        match self.shape() {
            Shape::Leaf(_) => 1,
            Shape::Binary(_, l, r) => 1 + l.height().max(r.height()),
        }
    }

    /// Leaf values in left-to-right order
    pub fn leaves(&self) -> Vec<f64> {
        fn collect(expr: &Expression, out: &mut Vec<f64>) {
            match expr.shape() {
                Shape::Leaf(n) => out.push(n),
                Shape::Binary(_, l, r) => {
                    collect(l, out);
                    collect(r, out);
                }
            }
        }

        let mut out = Vec::new();
        collect(self, &mut out);
        out
    }
}
