//! Built-in rule data. Pure configuration: the classifier only reads it.

use phf::{phf_map, phf_set};

/// Domains with a hard rule on the local-part length (`prefix@domain`).
pub(crate) static MINIMUM_PREFIX: phf::Map<&'static str, usize> = phf_map! {
    "gmail.com" => 6,
};

/// Common typos of major providers.
pub(crate) static MISTYPED_DOMAINS: phf::Set<&'static str> = phf_set! {
    "gail.com", "gamil.com", "gmai.com",
};

/// Throwaway-mail providers whose MX hosts seed the reputation blocklist.
/// mvrht.com: 10minutemail.com, sharklasers.com: guerrillamail.com,
/// teleworm.us: fakemailgenerator.com, hmamail.com: hidemyass.
pub(crate) static DISPOSABLE_MX_DOMAINS: phf::Set<&'static str> = phf_set! {
    "mvrht.com", "mailinator.com", "sharklasers.com",
    "teleworm.us", "hmamail.com",
};

/// Known throwaway or placeholder domains.
pub(crate) static BLOCKED_DOMAINS: phf::Set<&'static str> = phf_set! {
    "0clickemail.com", "10minutemail.com", "10minutemail.de",
    "123-m.com", "126.com", "139.com",
    "163.com", "1pad.de", "20minutemail.com",
    "21cn.com", "2prong.com", "33mail.com",
    "3d-painting.com", "4warding.com", "4warding.net",
    "4warding.org", "60minutemail.com", "6paq.com",
    "7days-printing.com", "7tags.com", "99experts.com",
    "agedmail.com", "amilegit.com", "ano-mail.net",
    "anonbox.net", "anonymbox.com", "antispam.de",
    "anymail.com", "armyspy.com", "beefmilk.com",
    "bigstring.com", "binkmail.com", "bio-muesli.net",
    "bob.com", "bobmail.info", "bofthew.com",
    "boxformail.in", "brefmail.com", "brennendesreich.de",
    "broadbandninja.com", "bsnow.net", "buffemail.com",
    "bugmenot.com", "bumpymail.com", "bund.us",
    "c2.hu", "cellurl.com", "chammy.info",
    "cheatmail.de", "chogmail.com", "chong-mail.com",
    "chong-mail.net", "chong-mail.org", "clixser.com",
    "cmail.com", "cmail.net", "cmail.org",
    "consumerriot.com", "cool.fr.nf", "courriel.fr.nf",
    "courrieltemporaire.com", "curryworld.de", "cust.in",
    "cuvox.de", "dacoolest.com", "dandikmail.com",
    "dayrep.com", "dbunker.com", "dcemail.com",
    "deadaddress.com", "deagot.com", "dealja.com",
    "despam.it", "devnullmail.com", "digitalsanctuary.com",
    "dingbone.com", "discardmail.com", "discardmail.de",
    "disposableinbox.com", "dispose.it", "disposeamail.com",
    "dispostable.com", "dodgeit.com", "dodgit.com",
    "dodgit.org", "domozmail.com", "dontreg.com",
    "dontsendmespam.de", "drdrb.com", "drdrb.net",
    "dudmail.com", "dump-email.info", "dumpyemail.com",
    "duskmail.com", "e-mail.com", "e-mail.org",
    "e4ward.com", "easytrashmail.com", "einrot.de",
    "email.com", "email60.com", "emailgo.de",
    "emailias.com", "emailinfive.com", "emaillime.com",
    "emailmiser.com", "emailtemporar.ro", "emailtemporario.com.br",
    "emailthe.net", "emailtmp.com", "emailwarden.com",
    "example.com", "example.net", "example.org",
    "explodemail.com", "fakeinbox.com", "fakeinformation.com",
    "fakemail.fr", "fantasymail.de", "fastacura.com",
    "fatflap.com", "fdfdsfds.com", "fightallspam.com",
    "filzmail.com", "fizmail.com", "flyspam.com",
    "fr33mail.info", "frapmail.com", "friendlymail.co.uk",
    "fuckingduh.com", "fudgerub.com", "garliclife.com",
    "get1mail.com", "get2mail.fr", "getairmail.com",
    "getmails.eu", "getonemail.com", "getonemail.net",
    "gishpuppy.com", "goemailgo.com", "gotmail.com",
    "gotmail.net", "gotmail.org", "gotti.otherinbox.com",
    "great-host.in", "guerillamail.org", "guerrillamail.biz",
    "guerrillamail.com", "guerrillamail.de", "guerrillamail.net",
    "guerrillamail.org", "guerrillamailblock.com", "hacccc.com",
    "haltospam.com", "herp.in", "hidzz.com",
    "hochsitze.com", "hotmil.com", "hotpop.com",
    "hulapla.de", "hushmail.com", "ieatspam.eu",
    "ieatspam.info", "imails.info", "incognitomail.com",
    "incognitomail.net", "incognitomail.org", "instant-mail.de",
    "internet.com", "ipoo.org", "irish2me.com",
    "jetable.com", "jetable.fr.nf", "jetable.net",
    "jetable.org", "jnxjn.com", "jsrsolutions.com",
    "junk1e.com", "kasmail.com", "klassmaster.com",
    "klzlk.com", "kulturbetrieb.info", "kurzepost.de",
    "lavabit.com", "letthemeatspam.com", "lhsdv.com",
    "lifebyfood.com", "litedrop.com", "lookugly.com",
    "lr78.com", "lroid.com", "m4ilweb.info",
    "mail-filter.com", "mail.by", "mail.com",
    "mail.net", "mail114.net", "mail4trash.com",
    "mailbucket.org", "mailcatch.com", "maileater.com",
    "mailexpire.com", "mailguard.me", "mailin8r.com",
    "mailinator.com", "mailinator.net", "mailinator.org",
    "mailinator.us", "mailinator2.com", "mailme.lv",
    "mailmetrash.com", "mailmoat.com", "mailnator.com",
    "mailnesia.com", "mailnull.com", "mailquack.com",
    "mailscrap.com", "mailzilla.org", "makemetheking.com",
    "manybrain.com", "mbx.cc", "mega.zik.dj",
    "meltmail.com", "mierdamail.com", "migumail.com",
    "mintemail.com", "mobileninja.co.uk", "moburl.com",
    "moncourrier.fr.nf", "monemail.fr.nf", "monmail.fr.nf",
    "mt2009.com", "myemailboxy.com", "mymail-in.net",
    "mypacks.net", "mypartyclip.de", "mytempemail.com",
    "mytrashmail.com", "nepwk.com", "nervmich.net",
    "nervtmich.net", "nice-4u.com", "no-spam.ws",
    "nobulk.com", "noclickemail.com", "nogmailspam.info",
    "nomail.xl.cx", "nomail2me.com", "none.com",
    "none.net", "nospam.ze.tc", "nospam4.us",
    "nospamfor.us", "nospamthanks.info", "notmailinator.com",
    "nowhere.org", "nowmymail.com", "nwldx.com",
    "objectmail.com", "obobbo.com", "onewaymail.com",
    "otherinbox.com", "owlpic.com", "pcusers.otherinbox.com",
    "pepbot.com", "poczta.onet.pl", "politikerclub.de",
    "pookmail.com", "privy-mail.com", "proxymail.eu",
    "prtnx.com", "putthisinyourspamdatabase.com", "qq.com",
    "quickinbox.com", "rcpt.at", "recode.me",
    "regbypass.com", "rmqkr.net", "royal.net",
    "rppkn.com", "rtrtr.com", "s0ny.net",
    "safe-mail.net", "safetymail.info", "safetypost.de",
    "sample.com", "sample.net", "sample.org",
    "sandelf.de", "saynotospams.com", "schafmail.de",
    "selfdestructingmail.com", "sendspamhere.com", "sharklasers.com",
    "shitmail.me", "shitware.nl", "sinnlos-mail.de",
    "siteposter.net", "skeefmail.com", "slopsbox.com",
    "smellfear.com", "snakemail.com", "sneakemail.com",
    "snkmail.com", "sofort-mail.de", "sogetthis.com",
    "spam.com", "spam.la", "spam.su",
    "spam4.me", "spamavert.com", "spambob.net",
    "spambob.org", "spambog.com", "spambog.de",
    "spambog.ru", "spambox.info", "spambox.us",
    "spamcero.com", "spamday.com", "spamex.com",
    "spamfree.eu", "spamfree24.com", "spamfree24.de",
    "spamfree24.eu", "spamfree24.info", "spamfree24.net",
    "spamfree24.org", "spamgourmet.com", "spamherelots.com",
    "spamhereplease.com", "spamhole.com", "spamify.com",
    "spaminator.de", "spamkill.info", "spaml.com",
    "spaml.de", "spammotel.com", "spamobox.com",
    "spamsalad.in", "spamspot.com", "spamthis.co.uk",
    "spamthisplease.com", "spamtroll.net", "speed.1s.fr",
    "spoofmail.de", "squizzy.de", "stinkefinger.net",
    "stuffmail.de", "supergreatmail.com", "superstachel.de",
    "suremail.info", "tagyourself.com", "talkinator.com",
    "tapchicuoihoi.com", "teewars.org", "teleworm.com",
    "teleworm.us", "temp.emeraldwebmail.com", "tempalias.com",
    "tempe-mail.com", "tempemail.biz", "tempemail.co.za",
    "tempemail.com", "tempemail.net", "tempinbox.co.uk",
    "tempinbox.com", "tempmail.it", "tempmaildemo.com",
    "tempomail.fr", "temporaryemail.net", "temporaryemail.us",
    "temporaryinbox.com", "tempthe.net", "test.com",
    "test.net", "thanksnospam.info", "thankyou2010.com",
    "thisisnotmyrealemail.com", "throwawayemailaddress.com", "tittbit.in",
    "tmailinator.com", "tradermail.info", "trash-amil.com",
    "trash-mail.at", "trash-mail.com", "trash-mail.de",
    "trash2009.com", "trash2010.com", "trash2011.com",
    "trashmail.at", "trashmail.com", "trashmail.me",
    "trashmail.net", "trashmail.ws", "trashymail.com",
    "trashymail.net", "tyldd.com", "uggsrock.com",
    "umail.net", "uroid.com", "veryrealemail.com",
    "vidchart.com", "vubby.com", "webemail.me",
    "webm4il.info", "weg-werf-email.de", "wegwerf-email-addressen.de",
    "wegwerf-emails.de", "wegwerfadresse.de", "wegwerfemail.de",
    "wegwerfmail.de", "wegwerfmail.info", "wegwerfmail.net",
    "wegwerfmail.org", "wh4f.org", "whatiaas.com",
    "whatsaas.com", "whyspam.me", "willselfdestruct.com",
    "winemaven.info", "wuzupmail.net", "www.com",
    "xoxy.net", "xyzfree.net", "yaho.com",
    "yahoo.com.ph", "yahoo.com.vn", "yeah.net",
    "yogamaven.com", "yopmail.com", "yopmail.fr",
    "yopmail.net", "yuurok.com", "za.com",
    "zippymail.info", "zoemail.net", "zomg.info",
};
