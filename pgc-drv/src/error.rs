//! Rendering phase errors into the §7 message templates.
//!
//! Every phase's error type already carries the positional context and a
//! `Display` impl for its own body text; this module's only job is to
//! prepend the shared `"Erro na linha {N} – "` prefix and, for the lexer,
//! decide whether the offending lexeme is part of the body.

use pgc_lex::LexError;
use pgc_par::error::ParseError;
use pgc_sem::error::SemError;

pub fn render_lex_error(err: LexError<'_>) -> String {
    let body = match err.lexeme() {
        Some(lexeme) => format!("{lexeme} {err}"),
        None => err.to_string(),
    };
    match err.position() {
        Some(pos) => format!("Erro na linha {} – {body}", pos.line),
        None => format!("Erro – {body}"),
    }
}

pub fn render_parse_error(err: ParseError<'_>) -> String {
    format!("Erro na linha {} – {err}", err.position().line)
}

pub fn render_sem_error(err: SemError<'_>) -> String {
    format!("Erro na linha {} – {err}", err.position().line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pgc_gen::generate;
    use pgc_lex::Lexer;
    use pgc_par::Parser;
    use pgc_sem::Checker;

    #[test]
    fn undeclared_ident_renders_the_sem_template() {
        let tokens = Lexer::new("main i_x = i_y; end").tokenize().unwrap();
        let main = Parser::parse(tokens).unwrap();
        let err = Checker::new().check(&main).unwrap_err();
        assert_eq!(render_sem_error(err), "Erro na linha 1 – i_y não declarado");
    }

    #[test]
    fn redeclared_ident_renders_the_sem_template() {
        let tokens = Lexer::new("main i_x; i_x; end").tokenize().unwrap();
        let main = Parser::parse(tokens).unwrap();
        let err = Checker::new().check(&main).unwrap_err();
        assert_eq!(render_sem_error(err), "Erro na linha 1 – i_x já declarado");
    }

    #[test]
    fn unterminated_string_omits_the_lexeme() {
        let err = Lexer::new(r#"main writeln("hi); end"#)
            .tokenize()
            .unwrap_err();
        assert_eq!(
            render_lex_error(err),
            "Erro na linha 1 – constante_string inválida"
        );
    }

    #[test]
    fn malformed_identifier_includes_the_lexeme() {
        let err = Lexer::new("main iBad; end").tokenize().unwrap_err();
        assert_eq!(
            render_lex_error(err),
            "Erro na linha 1 – iBad identificador inválido"
        );
    }

    #[test]
    fn missing_end_renders_the_parser_template() {
        let tokens = Lexer::new("main i_x").tokenize().unwrap();
        let err = Parser::parse(tokens).unwrap_err();
        assert_eq!(
            render_parse_error(err),
            "Erro na linha 1 – encontrado EOF esperado ;"
        );
    }

    #[test]
    fn successful_pipeline_never_reaches_error_rendering() {
        let tokens = Lexer::new("main end").tokenize().unwrap();
        let main = Parser::parse(tokens).unwrap();
        assert!(Checker::new().check(&main).is_ok());
        assert!(generate(&main).starts_with(".assembly"));
    }
}
