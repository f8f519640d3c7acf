//! Plain-text catalog reports.

use std::fmt::Write;

use crate::domain::catalog::{sort_by_order, Product, Question};
use crate::domain::foundation::Timestamp;

const RULE: &str = "===========================================";

/// A rendered report and the name it should be downloaded as.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextReport {
    pub filename: String,
    pub body: String,
}

/// Lists every question in presentation order.
pub fn question_report(questions: &[Question], generated_at: Timestamp) -> TextReport {
    let mut sorted = questions.to_vec();
    sort_by_order(&mut sorted);

    let mut body = String::new();
    header(&mut body, "RELATÓRIO DE PERGUNTAS DO CHATBOT", "perguntas", sorted.len(), &generated_at);

    for (i, question) in sorted.iter().enumerate() {
        let _ = writeln!(body, "{}. {}", i + 1, question.text());
        let _ = writeln!(body, "   Tipo: {}", question.kind().label());
        let _ = writeln!(body, "   Ordem no fluxo: {}", question.order());
        if question.kind().is_multiple_choice() {
            let _ = writeln!(body, "   Opções de resposta:");
            for (j, option) in question.options().iter().enumerate() {
                let _ = writeln!(body, "     {}. {}", j + 1, option);
            }
        } else {
            let _ = writeln!(body, "   Tipo de resposta: Texto livre");
        }
        let _ = writeln!(body, "   Data de cadastro: {}\n", question.created_at().to_report_string());
    }

    let _ = writeln!(body, "{}", RULE);
    let _ = writeln!(body, "Relatório gerado automaticamente pelo sistema de chatbot");

    TextReport {
        filename: format!("relatorio-perguntas-{}.txt", generated_at.as_unix_millis()),
        body,
    }
}

/// Lists every product in storage order.
pub fn product_report(products: &[Product], generated_at: Timestamp) -> TextReport {
    let mut body = String::new();
    header(&mut body, "RELATÓRIO DE PRODUTOS", "produtos", products.len(), &generated_at);

    for (i, product) in products.iter().enumerate() {
        let description = if product.description().trim().is_empty() {
            "Sem descrição"
        } else {
            product.description()
        };
        let _ = writeln!(body, "{}. {}", i + 1, product.name());
        let _ = writeln!(body, "   Descrição: {}", description);
        let _ = writeln!(body, "   Data de cadastro: {}", product.created_at().to_report_string());
        let _ = writeln!(body, "   Imagem: {}\n", product.image_ref().unwrap_or("Sem imagem"));
    }

    let _ = writeln!(body, "{}", RULE);

    TextReport {
        filename: format!("relatorio-produtos-{}.txt", generated_at.as_unix_millis()),
        body,
    }
}

fn header(body: &mut String, title: &str, noun: &str, total: usize, at: &Timestamp) {
    let _ = writeln!(body, "========== {} ==========\n", title);
    let _ = writeln!(body, "Total de {}: {}", noun, total);
    let _ = writeln!(body, "Data: {}\n", at.to_report_string());
    let _ = writeln!(body, "{}\n", RULE);
}
