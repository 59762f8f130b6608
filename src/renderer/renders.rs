use crate::renderer::components::*;
use crate::renderer::traits::*;
use crate::value::Value;

impl Render for Value {
    fn render(&self, options: &InspectOptions, context: &mut RenderContext) -> String {
        let painter = StylePainter::new(options.colors);

        if !self.is_composite() {
            return render_primitive(self, &painter);
        }

        // Depth budget applies to composites only; primitives above always
        // render in full.
        if let Some(budget) = options.depth {
            if context.depth() > budget {
                return painter.paint(Token::Label, elision_marker(self));
            }
        }

        let id = self.identity();
        if let Some(id) = id {
            if context.seen(id) {
                return painter.paint(Token::Label, "[Circular]");
            }
        }

        context.enter(id);
        let layout = LayoutEngine::new(options.break_length);
        let output = match self {
            Value::Seq(items) => {
                let children: Vec<String> = items
                    .borrow()
                    .iter()
                    .map(|item| item.render(options, context))
                    .collect();
                layout.compose("", &children, '[', ']')
            }
            Value::Record(fields) => {
                let children: Vec<String> = fields
                    .borrow()
                    .iter()
                    .map(|(key, value)| {
                        format!("{}: {}", record_key(key, &painter), value.render(options, context))
                    })
                    .collect();
                layout.compose("", &children, '{', '}')
            }
            Value::Map(entries) => {
                let entries = entries.borrow();
                let label = painter.paint(Token::Label, &format!("Map({})", entries.len()));
                let children: Vec<String> = entries
                    .iter()
                    .map(|(key, value)| {
                        format!(
                            "{} => {}",
                            key.render(options, context),
                            value.render(options, context)
                        )
                    })
                    .collect();
                layout.compose(&label, &children, '{', '}')
            }
            Value::Set(elems) => {
                let elems = elems.borrow();
                let label = painter.paint(Token::Label, &format!("Set({})", elems.len()));
                let children: Vec<String> = elems
                    .iter()
                    .map(|elem| elem.render(options, context))
                    .collect();
                layout.compose(&label, &children, '{', '}')
            }
            // Non-composites are handled above
            other => render_primitive(other, &painter),
        };
        context.leave(id);

        output
    }
}

fn render_primitive(value: &Value, painter: &StylePainter) -> String {
    match value {
        Value::Str(s) => painter.paint(Token::Str, &quote_string(s)),
        Value::Int(n) => painter.paint(Token::Number, &n.to_string()),
        Value::Float(f) => painter.paint(Token::Number, &f.to_string()),
        Value::Bool(b) => painter.paint(Token::Boolean, if *b { "true" } else { "false" }),
        Value::Null => painter.paint(Token::Null, "null"),
        Value::Sym(name) => painter.paint(Token::Symbol, &format!("Symbol({})", name)),
        Value::Opaque(repr) => repr.clone(),
        // Composites never reach here
        _ => String::new(),
    }
}

fn record_key(key: &str, painter: &StylePainter) -> String {
    if is_identifier(key) {
        key.to_string()
    } else {
        painter.paint(Token::Str, &quote_string(key))
    }
}

fn elision_marker(value: &Value) -> &'static str {
    match value {
        Value::Seq(_) => "[Sequence]",
        Value::Record(_) => "[Record]",
        Value::Map(_) => "[Map]",
        Value::Set(_) => "[Set]",
        _ => "[Value]",
    }
}
