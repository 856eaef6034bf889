use serde::{Deserialize, Serialize};

use crate::features::contact::CepAddress;

/// Raw ViaCEP JSON body. Unknown CEPs come back as `{"erro": true}`
/// (older deployments send the string `"true"`), so every field is optional.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct ViaCepResponse {
    pub cep: Option<String>,
    pub logradouro: Option<String>,
    pub complemento: Option<String>,
    pub bairro: Option<String>,
    pub localidade: Option<String>,
    pub uf: Option<String>,
    pub ibge: Option<String>,
    pub ddd: Option<String>,
    #[serde(default)]
    pub erro: Option<serde_json::Value>,
}

impl ViaCepResponse {
    pub fn is_error(&self) -> bool {
        match &self.erro {
            Some(serde_json::Value::Bool(flag)) => *flag,
            Some(serde_json::Value::String(flag)) => flag == "true",
            _ => false,
        }
    }

    pub fn into_address(self) -> CepAddress {
        CepAddress {
            cep: self.cep.unwrap_or_default(),
            logradouro: self.logradouro.unwrap_or_default(),
            localidade: self.localidade.unwrap_or_default(),
            bairro: self.bairro.unwrap_or_default(),
            uf: self.uf.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_found_response() {
        let body = r#"{
            "cep": "01001-000",
            "logradouro": "Praça da Sé",
            "complemento": "lado ímpar",
            "bairro": "Sé",
            "localidade": "São Paulo",
            "uf": "SP",
            "ibge": "3550308",
            "gia": "1004",
            "ddd": "11",
            "siafi": "7107"
        }"#;
        let response: ViaCepResponse = serde_json::from_str(body).unwrap();
        assert!(!response.is_error());

        let address = response.into_address();
        assert_eq!(address.logradouro, "Praça da Sé");
        assert_eq!(address.localidade, "São Paulo");
        assert_eq!(address.uf, "SP");
    }

    #[test]
    fn test_parse_error_response() {
        let response: ViaCepResponse = serde_json::from_str(r#"{"erro": true}"#).unwrap();
        assert!(response.is_error());

        let legacy: ViaCepResponse = serde_json::from_str(r#"{"erro": "true"}"#).unwrap();
        assert!(legacy.is_error());
    }
}
