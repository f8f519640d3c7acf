//! HTML fragments for the chat window.
//!
//! Every interpolated value goes through [`html_escape`]; nothing coming from
//! the catalog or the recommendation service is trusted as markup.

use std::fmt::Write;

use crate::domain::flow::QuestionPrompt;
use crate::domain::recommendation::{
    Explanation, NumberedRule, ProductSection, RuleSection, FALLBACK_NOTICE,
};

const RESTART_BUTTON: &str = r#"<div class="acoes-finais"><button type="button" class="btn btn-primary btn-nova-consulta" data-action="reiniciar"><span class="btn-icon">🔄</span><span class="btn-text">Nova Consulta</span></button></div>"#;

/// Escapes text for use in element content and quoted attributes.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Renders a question with its option buttons, if any.
pub fn render_prompt(prompt: &QuestionPrompt) -> String {
    let mut html = String::from(r#"<div class="message-content">"#);
    if prompt.clarifying {
        html.push_str("<p><strong>Por favor, escolha uma das opções abaixo:</strong></p>");
        html.push_str("<p>Esta pergunta requer que você selecione uma das alternativas disponíveis.</p>");
    } else {
        let _ = write!(html, "<p>{}</p>", html_escape(&prompt.text));
    }
    if !prompt.options.is_empty() {
        html.push_str(r#"<div class="opcoes-container">"#);
        for option in &prompt.options {
            let escaped = html_escape(option);
            let _ = write!(
                html,
                r#"<button type="button" class="opcao-btn" data-pergunta-id="{}" data-opcao="{}">{}</button>"#,
                prompt.question_id, escaped, escaped
            );
        }
        html.push_str("</div>");
    }
    html.push_str("</div>");
    html
}

/// Renders the closing message of a consultation.
pub fn render_explanation(explanation: &Explanation) -> String {
    let mut html = String::from(r#"<div class="message-content">"#);
    match explanation {
        Explanation::Recommended {
            product_name,
            product,
            rules,
        } => {
            html.push_str(r#"<div class="cabecalho-recomendacao"><div class="badge-recomendacao">Recomendação Personalizada</div><h2>Máquina Recomendada</h2></div>"#);
            html.push_str(r#"<div class="recomendacao-produto">"#);
            let _ = write!(
                html,
                r#"<div class="produto-header"><h3 class="produto-nome">{}</h3><span class="badge-ia">Recomendado por IA</span></div>"#,
                html_escape(product_name)
            );
            render_product(&mut html, product);
            html.push_str("</div>");
            render_rules(&mut html, rules);
        }
        Explanation::Fallback { message } => {
            html.push_str(r#"<div class="cabecalho-recomendacao"><h2>Obrigado pela sua Consulta</h2></div>"#);
            let _ = write!(
                html,
                r#"<div class="error-notification"><span class="error-icon">⚠️</span><p class="error-message">{}</p></div>"#,
                html_escape(message)
            );
            let _ = write!(html, r#"<p class="mensagem-fallback">{}</p>"#, FALLBACK_NOTICE);
        }
    }
    html.push_str(RESTART_BUTTON);
    html.push_str("</div>");
    html
}

fn render_product(html: &mut String, product: &ProductSection) {
    match product {
        ProductSection::Details {
            name,
            description,
            image_ref,
        } => {
            html.push_str(r#"<div class="produto-detalhes">"#);
            if let Some(src) = image_ref {
                let _ = write!(
                    html,
                    r#"<div class="produto-imagem-wrapper"><img src="{}" alt="{}" class="produto-imagem"></div>"#,
                    html_escape(src),
                    html_escape(name)
                );
            }
            if !description.is_empty() {
                let _ = write!(
                    html,
                    r#"<div class="produto-descricao-wrapper"><h4 class="descricao-titulo">Sobre o Produto</h4><p class="produto-descricao">{}</p></div>"#,
                    html_escape(description)
                );
            }
            html.push_str("</div>");
        }
        ProductSection::ComingSoon => {
            html.push_str(r#"<div class="produto-sem-info"><p>Informações detalhadas sobre este produto estarão disponíveis em breve.</p></div>"#);
        }
    }
}

fn render_rules(html: &mut String, rules: &RuleSection) {
    match rules {
        RuleSection::Listed(items) => {
            html.push_str(r#"<div class="regras-decisao"><div class="regras-header"><h4>🎯 Por que esta máquina foi escolhida?</h4><p class="regras-subtitulo">As seguintes características foram determinantes na recomendação:</p></div><div class="regras-lista">"#);
            for rule in items {
                render_rule(html, rule);
            }
            html.push_str("</div></div>");
        }
        RuleSection::Unavailable => {
            html.push_str(r#"<div class="regras-decisao regras-indisponiveis"><div class="regras-header"><h4>ℹ️ Informação sobre a Recomendação</h4><p class="regras-subtitulo">As regras de decisão não estão disponíveis no momento.</p></div></div>"#);
        }
    }
}

fn render_rule(html: &mut String, rule: &NumberedRule) {
    let (class, icon, badge) = if rule.emphasized {
        (
            "regra-item regra-alta",
            "⭐",
            r#"<span class="badge-importancia">Determinante</span>"#,
        )
    } else {
        ("regra-item", "✓", "")
    };
    let _ = write!(
        html,
        r#"<div class="{}"><div class="regra-numero">{}</div><div class="regra-conteudo"><div class="regra-pergunta"><span class="regra-icon">{}</span><span class="regra-texto">{}</span>{}</div><div class="regra-resposta">{}</div></div></div>"#,
        class,
        rule.number,
        icon,
        html_escape(&rule.question_text),
        badge,
        html_escape(&rule.answer_text)
    );
}
