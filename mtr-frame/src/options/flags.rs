//! 位标志字段的选项表
//!
//! 编码值为所选选项代码的按位或。标注 MTR 1.x / 2.x 的选项在两代固件中
//! 含义不同，但代码相同。

coded_options! {
    /// 卡片验证信息
    ///
    /// International 与 InsertNpaLocal 共用 0x08；AccsModeNcc 代码为 0。
    pub enum CardValidation {
        /// Auth for Local
        LocalAuth = 0x01,
        /// Delay Auth
        DelayAuth = 0x02,
        /// MCE Auth for Local
        MceLocalAuth = 0x04,
        /// International
        International = 0x08,
        /// Insert NPA for 0+ Local/Intra
        InsertNpaLocal = 0x08,
        /// Manually Entered Call Card
        ManualCallingCard = 0x10,
        /// ACCS Mode use NCC
        AccsModeNcc = 0x00,
        /// Validate after Number obtained
        MceValidateAfterNumber = 0x80,
    }
}

coded_options! {
    /// ACCS 模式信息
    pub enum AccsInfo {
        /// ACCS Mode is available
        Available = 0x01,
        /// Route MCE Calls via 0+ network
        MceRouteToAccs = 0x02,
        /// MCE Feature enable
        MceEnabled = 0x04,
        /// MCE Calls MUST be NCC-validated
        MceValidationRequired = 0x08,
        /// AOS Feature enable
        AosEnabled = 0x10,
        /// Strip off leading 0/1
        StripLeadingZeroOrOne = 0x20,
        /// Strip off local NPA
        StripLocalNpa = 0x80,
    }
}

coded_options! {
    /// 来电防欺诈
    pub enum AntiFraud {
        /// Answer Supervision
        AnswerSupervision = 0x00,
    }
}

coded_options! {
    /// 停止服务 / POTS 标志
    pub enum OosPotsFlag {
        /// Do not put Terminal Out-Of-Service when CDR list is full
        CdrFullNoOos = 0x01,
        /// Display Rate (MTR 1.x: Only Card-Terminals)
        DisplayRate = 0x02,
        /// Incoming call FCA precedence
        IncomingCallFcaPreced = 0x04,
        /// FCA zero value card
        FcaZeroValueCard = 0x08,
        /// MTR 1.x: Spare 4 / MTR 2.x: Automatically revert to primary Modem pool
        RevertToPrimaryPool = 0x10,
        /// MTR 1.x: Spare 5 / MTR 2.x: Block Carrier calls without internal rate
        BlockNoRateCarrier = 0x20,
        /// MTR 1.x: Spare 6 / MTR 2.x: Creditcard CDRs contain the charged amount
        RatedCreditCardCdr = 0x40,
        /// MTR 1.x: Spare 7 / MTR 2.x: Force 11-digit-dialing on local calls
        Force11DigitsLocal = 0x80,
    }
}

coded_options! {
    /// 计费标志（仅 MTR 2.x）
    pub enum RatingFlag {
        /// Enable NPA SBR
        NpaSbr = 0x01,
        /// Enable International SBR
        IntlSbr = 0x02,
        /// Enable Dial Around
        DialAround = 0x04,
        /// Show 1st xx min $, additional yy min $
        ShowTimeAndCharge = 0x08,
        /// Round up charge
        RoundUpCharge = 0x10,
        /// 7-digit no-wait Option
        SevenDigitNoWait = 0x20,
    }
}

coded_options! {
    /// 广告显示
    pub enum AdvertFlag {
        /// On Hook Adverts enabled
        OnHook = 0x01,
        /// Repdialer Adverts enabled
        RepDialer = 0x02,
        /// Call Established adverts enabled
        CallEstablished = 0x04,
        /// On Hook Date and Time displayed
        DateTimeDisplay = 0x08,
        /// On Hook Date and Time displayed in 12hr Format
        DateTime12Hour = 0x10,
    }
}

coded_options! {
    /// 被叫号码显示
    pub enum CalledNumberDisplay {
        /// Display Called Number Prompt
        CalledNumberPrompt = 0x01,
        /// Suppress Calling Prompt
        SuppressCallingPrompt = 0x80,
    }
}

coded_options! {
    /// 拨号转换（仅 MTR 1.x）
    pub enum DialingConversion {
        /// Convert Operator to Toll
        OperatorToToll = 0x01,
        /// Convert Toll to Operator
        TollToOperator = 0x02,
    }
}

coded_options! {
    /// 投币呼叫特性
    pub enum CoinCallFeature {
        /// Overtime
        Overtime = 0x01,
        /// Voice-Feedback
        VoiceFeedback = 0x02,
        /// 2nd Warning
        SecondWarning = 0x04,
    }
}

coded_options! {
    /// 智能卡标志
    ///
    /// Legacy（0x01）没有文档含义，但它是出厂默认值，沿用固件目录原样保留。
    pub enum SmartCardFlag {
        /// Legacy factory default
        Legacy = 0x01,
        /// Post payment rate request
        PostPaymentRateRequest = 0x20,
        /// Suppress terminal rate info
        SuppressTerminalRateInfo = 0x80,
    }
}
