use std::rc::Rc;

use pretty_assertions::assert_eq;

use super::*;

fn ident(name: &str) -> Identifier {
    Identifier::new(name, Span::DUMMY)
}

fn int(value: i64) -> Expression {
    Expression::Integer(IntegerLiteral {
        value,
        span: Span::DUMMY,
    })
}

fn infix(left: Expression, operator: InfixOp, right: Expression) -> Expression {
    Expression::Infix(Box::new(InfixExpression {
        left,
        operator,
        right,
        span: Span::DUMMY,
    }))
}

#[test]
fn let_statement_renders_as_source() {
    let program = Program {
        statements: vec![Statement::Let(LetStatement {
            name: ident("myVar"),
            value: Expression::Identifier(ident("anotherVar")),
            span: Span::DUMMY,
        })],
    };
    assert_eq!(program.to_string(), "let myVar = anotherVar;");
}

#[test]
fn nested_infix_is_parenthesised() {
    let expr = infix(int(1), InfixOp::Add, infix(int(2), InfixOp::Mul, int(3)));
    assert_eq!(expr.to_string(), "(1 + (2 * 3))");
}

#[test]
fn function_literal_renders_params_and_body() {
    let body = BlockStatement {
        statements: vec![Statement::Return(ReturnStatement {
            value: infix(
                Expression::Identifier(ident("x")),
                InfixOp::Add,
                Expression::Identifier(ident("y")),
            ),
            span: Span::DUMMY,
        })],
        span: Span::DUMMY,
    };
    let func = FunctionLiteral {
        parameters: Rc::from(vec![ident("x"), ident("y")]),
        body: Rc::new(body),
        span: Span::DUMMY,
    };
    assert_eq!(func.to_string(), "fn(x, y) { return (x + y); }");
}

#[test]
fn collections_and_strings() {
    let hash = HashLiteral {
        pairs: vec![(
            Expression::String(StringLiteral {
                value: "one".into(),
                span: Span::DUMMY,
            }),
            Expression::Array(ArrayLiteral {
                elements: vec![int(1), int(2)],
                span: Span::DUMMY,
            }),
        )],
        span: Span::DUMMY,
    };
    assert_eq!(hash.to_string(), "{\"one\": [1, 2]}");

    let float = Expression::Float(FloatLiteral {
        value: 2.0,
        span: Span::DUMMY,
    });
    assert_eq!(float.to_string(), "2.0");
}

#[test]
fn empty_block_and_else_branch() {
    let expr = IfExpression {
        condition: Expression::Boolean(BooleanLiteral {
            value: true,
            span: Span::DUMMY,
        }),
        consequence: BlockStatement {
            statements: vec![],
            span: Span::DUMMY,
        },
        alternative: Some(BlockStatement {
            statements: vec![Statement::Expression(ExpressionStatement {
                expression: int(1),
                span: Span::DUMMY,
            })],
            span: Span::DUMMY,
        }),
        span: Span::DUMMY,
    };
    assert_eq!(expr.to_string(), "if true {} else { 1 }");
}

#[test]
fn spans_come_from_the_node() {
    let stmt = Statement::Expression(ExpressionStatement {
        expression: Expression::New(NewExpression {
            class: ident("T"),
            span: Span::new(0, 3),
        }),
        span: Span::new(0, 5),
    });
    assert_eq!(stmt.span(), Span::new(0, 5));
    if let Statement::Expression(s) = &stmt {
        assert_eq!(s.expression.span(), Span::new(0, 3));
    }
}
