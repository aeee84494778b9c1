/// i18n.rs — English / Turkish result labels
use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Lang {
    En,
    Tr,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Label {
    SpotResults,
    FuturesResults,
    // spot
    TotalCost,
    NetProceeds,
    Pnl,
    PercentPnl,
    BreakEven,
    // futures
    Direction,
    PositionSize,
    Liquidation,
    PnlAtStopLoss,
    PnlAtTakeProfit,
    RiskReward,
    MaxRisk,
    SuggestedPosition,
    FundingCost,
    Commission,
    Roe,
}

impl Lang {
    pub fn text(self, label: Label) -> &'static str {
        use Label::*;
        match (self, label) {
            (Lang::En, SpotResults)       => "Spot Results",
            (Lang::Tr, SpotResults)       => "Spot Sonuçları",
            (Lang::En, FuturesResults)    => "Futures Results",
            (Lang::Tr, FuturesResults)    => "Vadeli Sonuçları",

            (Lang::En, TotalCost)         => "Total Cost",
            (Lang::Tr, TotalCost)         => "Toplam Maliyet",
            (Lang::En, NetProceeds)       => "Net Proceeds",
            (Lang::Tr, NetProceeds)       => "Net Satış Geliri",
            (Lang::En, Pnl)               => "PnL",
            (Lang::Tr, Pnl)               => "Kâr/Zarar",
            (Lang::En, PercentPnl)        => "% PnL",
            (Lang::Tr, PercentPnl)        => "% Kâr/Zarar",
            (Lang::En, BreakEven)         => "Break-even Price",
            (Lang::Tr, BreakEven)         => "Başabaş Fiyatı",

            (Lang::En, Direction)         => "Direction",
            (Lang::Tr, Direction)         => "Pozisyon Yönü",
            (Lang::En, PositionSize)      => "Position Size",
            (Lang::Tr, PositionSize)      => "Pozisyon Büyüklüğü",
            (Lang::En, Liquidation)       => "Liquidation Price",
            (Lang::Tr, Liquidation)       => "Likidasyon Fiyatı",
            (Lang::En, PnlAtStopLoss)     => "PnL if SL",
            (Lang::Tr, PnlAtStopLoss)     => "SL Senaryosu PnL",
            (Lang::En, PnlAtTakeProfit)   => "PnL if TP",
            (Lang::Tr, PnlAtTakeProfit)   => "TP Senaryosu PnL",
            (Lang::En, RiskReward)        => "Risk/Reward Ratio",
            (Lang::Tr, RiskReward)        => "Risk/Ödül Oranı",
            (Lang::En, MaxRisk)           => "Max Risk",
            (Lang::Tr, MaxRisk)           => "Azami Risk",
            (Lang::En, SuggestedPosition) => "Suggested Position",
            (Lang::Tr, SuggestedPosition) => "Önerilen Pozisyon",
            (Lang::En, FundingCost)       => "Funding Cost",
            (Lang::Tr, FundingCost)       => "Ek Maliyet",
            (Lang::En, Commission)        => "Commission",
            (Lang::Tr, Commission)        => "Komisyon",
            (Lang::En, Roe) | (Lang::Tr, Roe) => "ROE",
        }
    }
}
