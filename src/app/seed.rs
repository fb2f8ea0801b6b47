//! Built-in demo catalogue: collection points, history, products and tips.

use crate::app::store::{CollectionPoint, HistoryEntry, Product, Tip};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn collection_points() -> Vec<CollectionPoint> {
    vec![
        CollectionPoint {
            id: "eco-ambiental".into(),
            name: "Eco Ambiental".into(),
            address: "Av. Sete de Setembro, 123 - Centro, Salvador/BA".into(),
            materials: strings(&["Plástico", "Vidro", "Papel", "Metal"]),
            phone: "(71) 99999-0000".into(),
            hours: "Seg a Sáb, 8h às 18h".into(),
            distance_km: 1.2,
        },
        CollectionPoint {
            id: "bairro-x".into(),
            name: "Ponto Bairro X".into(),
            address: "Rua da Aurora, 88 - Bairro X, Salvador/BA".into(),
            materials: strings(&["Vidro", "Plástico"]),
            phone: "(71) 98888-1111".into(),
            hours: "Seg a Sex, 9h às 17h".into(),
            distance_km: 3.4,
        },
        CollectionPoint {
            id: "bairro-y".into(),
            name: "Estação Bairro Y".into(),
            address: "Av. Oceânica, 455 - Bairro Y, Salvador/BA".into(),
            materials: strings(&["Metal", "Papelão"]),
            phone: "(71) 97777-2222".into(),
            hours: "Todos os dias, 7h às 19h".into(),
            distance_km: 5.1,
        },
    ]
}

pub fn history() -> Vec<HistoryEntry> {
    let entry = |id: &str, date: &str, description: &str, value: i64| HistoryEntry {
        id: id.into(),
        date: date.into(),
        description: description.into(),
        value,
    };
    vec![
        entry("h-341", "12/11", "Eco Ambiental - Plástico e papel", 300),
        entry("h-340", "05/11", "Ponto Bairro X - Vidro", 150),
        entry("r-220", "02/11", "Resgate Ecobag", -150),
        entry("h-339", "29/10", "Eco Ambiental - Recicláveis", 220),
        entry("h-338", "20/10", "Estação Bairro Y - Metal", 180),
    ]
}

pub fn products() -> Vec<Product> {
    vec![
        Product {
            id: "ecobag".into(),
            name: "Ecobag reforçada".into(),
            category: "Sustentável".into(),
            cost: 1000,
            description: "Bolsa de algodão orgânico para incentivar compras sem plástico.".into(),
        },
        Product {
            id: "composteira".into(),
            name: "Mini composteira".into(),
            category: "Sustentável".into(),
            cost: 4000,
            description: "Kit compacto para transformar resíduos orgânicos em adubo.".into(),
        },
        Product {
            id: "squeeze".into(),
            name: "Squeeze inox".into(),
            category: "Brinde".into(),
            cost: 600,
            description: "Garrafa reutilizável para reduzir descartáveis.".into(),
        },
        Product {
            id: "creditos-mobilidade".into(),
            name: "Créditos de mobilidade".into(),
            category: "Benefício".into(),
            cost: 1200,
            description: "Desconto simbólico em transporte parceiro.".into(),
        },
    ]
}

pub fn tips() -> Vec<Tip> {
    vec![
        Tip {
            title: "Agende uma coleta".into(),
            description: "Selecione um ponto e registre a coleta simulada para ver o saldo crescer ao vivo."
                .into(),
        },
        Tip {
            title: "Personalize a demonstração".into(),
            description: "Entre com o nome do cliente ou investidor e deixe tudo mais humano.".into(),
        },
        Tip {
            title: "Mostre o valor rapidamente".into(),
            description: "Faça um resgate na loja e mostre como os pontos viram benefícios reais."
                .into(),
        },
    ]
}
