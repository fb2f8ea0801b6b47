//! Declared screen fragments.
//!
//! Each fragment is plain markup: bound nodes are filled in by the binder
//! table and list containers by the screen's list renderer.

use crate::view::node::{button, heading, muted, row, section, strong, text, Node, Tag, Tone};

pub fn declared() -> Vec<(&'static str, Vec<Node>)> {
    vec![
        ("welcome", welcome()),
        ("login", login()),
        ("signup", signup()),
        ("home", home()),
        ("map", map()),
        ("point-details", point_details()),
        ("wallet", wallet()),
        ("history", history()),
        ("store", store()),
    ]
}

fn nav() -> Node {
    row([
        button("Início").screen_trigger("home"),
        button("Mapa").screen_trigger("map"),
        button("Carteira").screen_trigger("wallet"),
        button("Histórico").screen_trigger("history"),
        button("Loja").screen_trigger("store"),
    ])
}

fn input(label: &str, name: &str) -> Node {
    Node::new(Tag::Input).text(label).field(name)
}

fn deposit_button(label: &str) -> Node {
    Node::new(Tag::Button)
        .text(label)
        .action("simulateDeposit")
        .point_source("selected")
}

fn welcome() -> Vec<Node> {
    vec![
        heading("EcoCoins"),
        text("Recicle, acumule EcoCoins e troque por benefícios reais."),
        muted("Demonstração: nenhum dado sai deste terminal."),
        section([
            button("Entrar").screen_trigger("login"),
            button("Criar conta").screen_trigger("signup"),
            button("Explorar como visitante").screen_trigger("home"),
        ]),
    ]
}

fn login() -> Vec<Node> {
    vec![
        heading("Entrar"),
        muted("Use qualquer nome: o acesso é simulado."),
        Node::new(Tag::Form)
            .auth_form("login")
            .child(input("Nome", "name"))
            .child(input("Senha", "password").masked())
            .child(Node::new(Tag::Submit).text("Entrar")),
        row([
            button("Criar conta").screen_trigger("signup"),
            button("Voltar").screen_trigger("welcome"),
        ]),
    ]
}

fn signup() -> Vec<Node> {
    vec![
        heading("Criar conta"),
        muted("Cadastro de demonstração, sem validação de credenciais."),
        Node::new(Tag::Form)
            .auth_form("signup")
            .child(input("Nome completo", "name"))
            .child(input("E-mail", "email"))
            .child(input("Senha", "password").masked())
            .child(Node::new(Tag::Submit).text("Cadastrar")),
        row([
            button("Já tenho conta").screen_trigger("login"),
            button("Voltar").screen_trigger("welcome"),
        ]),
    ]
}

fn home() -> Vec<Node> {
    vec![
        row([text("Olá,"), strong("").bind("userName")]),
        section([
            row([muted("Saldo"), strong("").bind("coins"), text("EcoCoins")]),
            row([
                muted("Este mês"),
                text("").bind("monthlyGain").tone(Tone::Positive),
                muted("de"),
                text("").bind("monthlyGoal"),
            ]),
        ]),
        section([
            heading("Ponto em destaque"),
            strong("").bind("selectedPointName"),
            text("").bind("selectedPointAddress"),
            deposit_button("Registrar coleta"),
        ]),
        heading("Dicas"),
        Node::new(Tag::List).list("tips"),
        nav(),
        button("Sair").screen_trigger("welcome"),
    ]
}

fn map() -> Vec<Node> {
    vec![
        heading("Pontos de coleta"),
        row([muted("Selecionado:"), strong("").bind("selectedPointName")]),
        Node::new(Tag::List).list("points"),
        deposit_button("Registrar coleta no ponto selecionado"),
        nav(),
    ]
}

fn point_details() -> Vec<Node> {
    vec![
        heading("").bind("selectedPointName"),
        text("").bind("selectedPointAddress"),
        row([muted("Horário:"), text("").bind("selectedPointHours")]),
        row([muted("Contato:"), text("").bind("selectedPointContact")]),
        row([muted("Materiais:"), text("").bind("selectedPointMaterials")]),
        Node::new(Tag::Row).list("selectedPointChips"),
        row([
            deposit_button("Registrar coleta"),
            button("Voltar ao mapa").screen_trigger("map"),
        ]),
        nav(),
    ]
}

fn wallet() -> Vec<Node> {
    vec![
        heading("Carteira"),
        row([strong("").bind("coins").tone(Tone::Accent), text("EcoCoins")]),
        row([muted("Ganhos do mês:"), text("").bind("monthlyGain").tone(Tone::Positive)]),
        row([muted("Meta mensal:"), text("").bind("monthlyGoal")]),
        heading("Últimas movimentações"),
        Node::new(Tag::List).list("historyShort"),
        row([
            button("Ver histórico completo").screen_trigger("history"),
            button("Ir para a loja").screen_trigger("store"),
        ]),
        nav(),
    ]
}

fn history() -> Vec<Node> {
    vec![
        heading("Histórico"),
        Node::new(Tag::List).list("historyFull"),
        nav(),
    ]
}

fn store() -> Vec<Node> {
    vec![
        heading("Loja"),
        row([muted("Seu saldo:"), strong("").bind("coins"), text("EcoCoins")]),
        Node::new(Tag::List).list("products"),
        nav(),
    ]
}
